//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::game_state::GameState;
use crate::config::rules::CARDS_PER_FOUNDATION;

/// 4 つの組札が全部 13 枚 (A〜K) 揃っていれば勝ち！🏆
pub fn is_won(state: &GameState) -> bool {
    state.foundations().iter().all(|pile| pile.len() == CARDS_PER_FOUNDATION)
}
