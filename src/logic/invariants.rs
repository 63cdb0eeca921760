// src/logic/invariants.rs
//! 盤面がいつも守っているはずの約束事をチェックするよ。
//! 実行役のデバッグアサートと、ランダムに遊ばせるテストで使う。

use std::collections::HashSet;

use thiserror::Error;

use crate::components::card::Card;
use crate::components::game_state::{GameState, Variant};
use crate::config::rules::DECK_SIZE;
use crate::logic::rules::{get_foundation_suit, is_valid_sequence};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("expected a full deck on the table, found {0} cards")]
    CardCount(usize),
    #[error("foundation {index} is not an Ace-up run of its suit")]
    FoundationOutOfOrder { index: usize },
    #[error("face-up cards of column {column} do not form a valid run")]
    BrokenRun { column: usize },
    #[error("column {column} has a face-down top card")]
    FaceDownTop { column: usize },
    #[error("{0} card has the wrong facing")]
    WrongFacing(&'static str),
}

/// 枚数以外の約束事を全部チェックする。
/// 手で組んだ途中の盤面 (52枚そろってない) にも使えるよ。
pub fn check_structure(state: &GameState) -> Result<(), InvariantViolation> {
    // 同じカードが二か所に無いこと
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in state.all_cards() {
        if !seen.insert(card.identity()) {
            return Err(InvariantViolation::DuplicateCard(*card));
        }
    }

    // 組札は A から順番に、そのスートだけ
    for (index, pile) in state.foundations().iter().enumerate() {
        let suit = get_foundation_suit(index as u8);
        let in_order = pile.iter().enumerate().all(|(position, card)| {
            Some(card.suit) == suit && usize::from(card.rank.value()) == position + 1 && card.is_face_up
        });
        if !in_order {
            return Err(InvariantViolation::FoundationOutOfOrder { index });
        }
    }

    if state.stock().iter().any(|card| card.is_face_up) {
        return Err(InvariantViolation::WrongFacing("stock"));
    }
    if state.waste().iter().any(|card| !card.is_face_up) {
        return Err(InvariantViolation::WrongFacing("waste"));
    }
    if state.free_cells().iter().flatten().any(|card| !card.is_face_up) {
        return Err(InvariantViolation::WrongFacing("free cell"));
    }

    for (column, cards) in state.tableau().iter().enumerate() {
        match state.variant() {
            Variant::Klondike => {
                let Some(top) = cards.last() else { continue };
                if !top.is_face_up {
                    return Err(InvariantViolation::FaceDownTop { column });
                }
                // 裏向きは下にかたまっていて、その上の表向き部分は全部つながった束
                let first_up = cards.iter().position(|card| card.is_face_up).unwrap_or(cards.len());
                if !is_valid_sequence(&cards[first_up..]) {
                    return Err(InvariantViolation::BrokenRun { column });
                }
            }
            Variant::FreeCell => {
                if cards.iter().any(|card| !card.is_face_up) {
                    return Err(InvariantViolation::WrongFacing("tableau"));
                }
            }
        }
    }
    Ok(())
}

/// 52枚の保存則: 全部のカードがちょうど 1 回ずつ盤面にあること。
pub fn check_conservation(state: &GameState) -> Result<(), InvariantViolation> {
    let count = state.all_cards().count();
    if count != DECK_SIZE {
        return Err(InvariantViolation::CardCount(count));
    }
    // 52 枚で重複が無ければ、全種類そろっている
    let unique: HashSet<_> = state.all_cards().map(Card::identity).collect();
    if unique.len() != DECK_SIZE {
        return Err(InvariantViolation::CardCount(unique.len()));
    }
    Ok(())
}

/// 全部の約束事をチェックする。
pub fn check_invariants(state: &GameState) -> Result<(), InvariantViolation> {
    check_conservation(state)?;
    check_structure(state)
}
