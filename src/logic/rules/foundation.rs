//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::error::{DestinationRule, MoveRejection};
use super::common::get_foundation_suit;

/// 指定されたカード 1 枚が、`foundation_index` 番の組札の一番上に置けるかチェックする。
///
/// - 組札が空: そのスートの A だけ置ける
/// - 空じゃない: 同じスートで、ランクが一番上の +1 のカードだけ置ける
pub fn check_foundation_move(
    card: &Card,
    foundation_index: u8,
    foundation: &[Card],
) -> Result<(), MoveRejection> {
    let violation = MoveRejection::DestinationRuleViolation(DestinationRule::FoundationSequence);

    if !card.is_face_up {
        debug!("[Foundation Rule] {} is face down", card);
        return Err(MoveRejection::InvalidSequence);
    }
    // 範囲外のインデックスは呼び出し側で弾いてるはずだけど、ここでも置けない扱いに
    let target_suit = get_foundation_suit(foundation_index).ok_or(violation)?;
    if card.suit != target_suit {
        debug!("[Foundation Rule] {} does not belong on {:?} foundation", card, target_suit);
        return Err(violation);
    }

    let accepted = match foundation.last() {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.next() == Some(card.rank),
    };
    debug!(
        "[Foundation Rule] {} onto Foundation({}) (top: {:?}): {}",
        card,
        foundation_index,
        foundation.last().map(ToString::to_string),
        accepted
    );
    if accepted {
        Ok(())
    } else {
        Err(violation)
    }
}

/// `check_foundation_move` の bool 版。
pub fn is_valid_foundation_move(card: &Card, foundation_index: u8, foundation: &[Card]) -> bool {
    check_foundation_move(card, foundation_index, foundation).is_ok()
}
