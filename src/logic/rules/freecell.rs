//! フリーセル専用のルール (空きマスへの移動と、スーパームーブの枚数制限) だよ。

use log::debug;

use crate::components::card::Card;
use crate::components::game_state::{GameState, Variant};
use crate::components::stack::PileId;
use crate::error::{DestinationRule, MoveRejection};

/// 空きマス `cell` にカードを置けるかチェックする。
/// 空きマスには 1 枚ずつしか入らない (束は置けない)！
pub fn check_free_cell_move(cards: &[Card], cell: &Option<Card>) -> Result<(), MoveRejection> {
    if cards.is_empty() {
        return Err(MoveRejection::EmptySource);
    }
    if cards.len() != 1 {
        return Err(MoveRejection::DestinationRuleViolation(DestinationRule::FreeCellSingleCard));
    }
    if !cards[0].is_face_up {
        return Err(MoveRejection::InvalidSequence);
    }
    if cell.is_some() {
        return Err(MoveRejection::DestinationRuleViolation(DestinationRule::FreeCellOccupied));
    }
    Ok(())
}

/// `check_free_cell_move` の bool 版。
pub fn is_valid_free_cell_move(cards: &[Card], cell: &Option<Card>) -> bool {
    check_free_cell_move(cards, cell).is_ok()
}

/// スーパームーブで一度に動かせる最大枚数。
///
/// `(空きマスの数 + 1) × 2^(空き列の数)`
///
/// 空きマスや空き列を仮置き場にして束を半分ずつ運ぶ手順を、1 手にまとめたもの。
/// クロンダイクには制限が無いので `usize::MAX`。
///
/// 実際の移動判定は、移動先の空き列を数えない `max_movable_cards_to` を使うよ。
pub fn max_movable_cards(state: &GameState) -> usize {
    supermove_capacity(state, state.empty_tableau_columns())
}

/// 移動先 `destination` を考えた最大枚数。
/// 移動先が空き列なら、その列は仮置き場に使えないので数えない。
pub fn max_movable_cards_to(state: &GameState, destination: PileId) -> usize {
    let mut empty_columns = state.empty_tableau_columns();
    if let PileId::Tableau(index) = destination {
        if state.column(usize::from(index)).is_some_and(<[Card]>::is_empty) {
            empty_columns = empty_columns.saturating_sub(1);
        }
    }
    supermove_capacity(state, empty_columns)
}

fn supermove_capacity(state: &GameState, empty_columns: usize) -> usize {
    match state.variant() {
        Variant::Klondike => usize::MAX,
        Variant::FreeCell => {
            let capacity = (state.empty_free_cells() + 1)
                .checked_shl(empty_columns as u32)
                .unwrap_or(usize::MAX);
            debug!(
                "[FreeCell Rule] capacity: ({} free cells + 1) x 2^{} columns = {}",
                state.empty_free_cells(),
                empty_columns,
                capacity
            );
            capacity
        }
    }
}

/// 束の枚数が制限内かチェックする。
pub fn check_supermove_capacity(requested: usize, capacity: usize) -> Result<(), MoveRejection> {
    if requested > capacity {
        Err(MoveRejection::SupermoveCapacityExceeded { requested, capacity })
    } else {
        Ok(())
    }
}
