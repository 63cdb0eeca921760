// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! 入力レイヤーから来た「どこから (MoveSource)」「どこへ (PileId)」を盤面に
//! 当てはめて、持ち上げる束を決めて、移動先ごとのルールに振り分けるよ。

use log::{debug, warn};

use crate::components::card::Card;
use crate::components::game_state::{GameState, Variant};
use crate::components::stack::{MoveSource, PileId};
use crate::error::{DestinationRule, EngineError, MoveRejection};
use super::common::is_valid_sequence;
use super::{foundation, freecell, tableau};

/// 検証に通った移動。実行役 (`logic::executor`) はこれをそのまま適用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub source: MoveSource,
    pub destination: PileId,
    /// 移動元の末尾から何枚動かすか。
    pub count: usize,
}

/// 移動元の記述子から、持ち上げるカードの束を取り出すよ。
///
/// - 場札: `offset` から一番上まで
/// - それ以外: 一番上の 1 枚だけ
///
/// 存在しないパイルや範囲外の `offset` は呼び出し側のバグなので `InvalidDescriptor`。
pub fn lifted_cards(
    state: &GameState,
    source: MoveSource,
    destination: PileId,
) -> Result<&[Card], EngineError> {
    let descriptor_error = |reason: &'static str| {
        warn!("[Validation] bad descriptor {} -> {}: {}", source, destination, reason);
        EngineError::InvalidDescriptor { origin: source, destination, reason }
    };
    let top_only = |pile: &[Card]| pile.len().checked_sub(1);

    let cards: &[Card] = match source {
        MoveSource::Stock => {
            let start = top_only(&state.stock).ok_or(MoveRejection::EmptySource)?;
            &state.stock[start..]
        }
        MoveSource::Waste => {
            let start = top_only(&state.waste).ok_or(MoveRejection::EmptySource)?;
            &state.waste[start..]
        }
        MoveSource::Foundation(index) => {
            let pile = state
                .foundations
                .get(usize::from(index))
                .ok_or_else(|| descriptor_error("foundation index out of range"))?;
            let start = top_only(pile).ok_or(MoveRejection::EmptySource)?;
            &pile[start..]
        }
        MoveSource::Tableau { column, offset } => {
            let pile = state
                .tableau
                .get(usize::from(column))
                .ok_or_else(|| descriptor_error("tableau column out of range"))?;
            if pile.is_empty() && offset == 0 {
                return Err(MoveRejection::EmptySource.into());
            }
            if offset >= pile.len() {
                return Err(descriptor_error("card offset past the end of the column"));
            }
            &pile[offset..]
        }
        MoveSource::FreeCell(index) => {
            let slot = state
                .free_cells
                .get(usize::from(index))
                .ok_or_else(|| descriptor_error("free cell index out of range"))?;
            slot.as_ref()
                .map(std::slice::from_ref)
                .ok_or(MoveRejection::EmptySource)?
        }
    };
    Ok(cards)
}

/// 移動が合法か検証して、合法なら `MovePlan` を返すよ。盤面は一切変えない！
pub fn validate_move(
    state: &GameState,
    source: MoveSource,
    destination: PileId,
) -> Result<MovePlan, EngineError> {
    if state.pile_len(destination).is_none() {
        warn!("[Validation] destination {} does not exist in {:?}", destination, state.variant());
        return Err(EngineError::InvalidDescriptor {
            origin: source,
            destination,
            reason: "destination pile does not exist",
        });
    }
    let cards = lifted_cards(state, source, destination)?;

    if source.pile() == destination {
        return Err(MoveRejection::DestinationRuleViolation(DestinationRule::SamePile).into());
    }
    if !is_valid_sequence(cards) {
        debug!("[Validation] {} cannot be lifted as one group", source);
        return Err(MoveRejection::InvalidSequence.into());
    }

    check_destination(state, cards, destination)?;
    debug!("[Validation] {} -> {} ({} cards) is legal", source, destination, cards.len());
    Ok(MovePlan { source, destination, count: cards.len() })
}

/// `validate_move` の bool 版。契約違反も「動かせない」扱い。
pub fn is_move_valid(state: &GameState, source: MoveSource, destination: PileId) -> bool {
    validate_move(state, source, destination).is_ok()
}

// 移動先の種類に応じてルールチェック
fn check_destination(state: &GameState, cards: &[Card], destination: PileId) -> Result<(), MoveRejection> {
    match destination {
        PileId::Stock | PileId::Waste => {
            Err(MoveRejection::DestinationRuleViolation(DestinationRule::NotADropTarget))
        }
        PileId::Foundation(index) => {
            if cards.len() != 1 {
                return Err(MoveRejection::DestinationRuleViolation(DestinationRule::FoundationSingleCard));
            }
            foundation::check_foundation_move(&cards[0], index, &state.foundations[usize::from(index)])
        }
        PileId::Tableau(index) => {
            tableau::check_tableau_move(state.variant, cards, &state.tableau[usize::from(index)])?;
            if state.variant == Variant::FreeCell {
                let capacity = freecell::max_movable_cards_to(state, destination);
                freecell::check_supermove_capacity(cards.len(), capacity)?;
            }
            Ok(())
        }
        PileId::FreeCell(index) => {
            freecell::check_free_cell_move(cards, &state.free_cells[usize::from(index)])
        }
    }
}
