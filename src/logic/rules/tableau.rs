//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::game_state::Variant;
use crate::error::{DestinationRule, MoveRejection};
use super::common::{is_valid_sequence, stacks_on};

/// 持ち上げた束 `cards` を、場札の列 `dest_column` に置けるかチェックする。
///
/// 1. 束そのものが動かせる並び (色交互・ランク -1) じゃないとダメ
/// 2. 空の列: クロンダイクは K から始まる束だけ、フリーセルは何でも OK
/// 3. 空じゃない列: 一番上のカードと色違いで、ランクがちょうど 1 小さいこと
///
/// フリーセルの枚数制限 (スーパームーブ) はここではなく `freecell` モジュールで見るよ。
pub fn check_tableau_move(
    variant: Variant,
    cards: &[Card],
    dest_column: &[Card],
) -> Result<(), MoveRejection> {
    if !is_valid_sequence(cards) {
        debug!("[Tableau Rule] lifted group is not a valid run ({} cards)", cards.len());
        return Err(MoveRejection::InvalidSequence);
    }
    let lead = &cards[0];

    let accepted = match dest_column.last() {
        Some(top) => {
            let ok = top.is_face_up && stacks_on(lead, top);
            debug!("[Tableau Rule] {} onto {}: {}", lead, top, ok);
            if ok {
                Ok(())
            } else {
                Err(DestinationRule::TableauColorOrRank)
            }
        }
        None => match variant {
            Variant::FreeCell => Ok(()),
            Variant::Klondike if lead.rank == Rank::King => Ok(()),
            Variant::Klondike => {
                debug!("[Tableau Rule] {} onto empty column: only a King may go here", lead);
                Err(DestinationRule::EmptyColumnNeedsKing)
            }
        },
    };
    accepted.map_err(MoveRejection::DestinationRuleViolation)
}

/// `check_tableau_move` の bool 版。
pub fn is_valid_tableau_move(variant: Variant, cards: &[Card], dest_column: &[Card]) -> bool {
    check_tableau_move(variant, cards, dest_column).is_ok()
}
