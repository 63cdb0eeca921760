// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 今すぐ組札 (Foundation) に上げられるカードを見つけて、片っ端から上げていく。
//!
//! 欲張り法なので、組札からカードを戻したりはしない。勝てる盤面でも
//! 勝ちまで持っていけるとは限らないけど、安全に上げられる分は全部拾えるよ。

use log::{debug, info, warn};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::{MoveSource, PileId};
use crate::config::rules::FOUNDATION_COUNT;
use crate::logic::executor::{execute_move, MoveRecord};
use crate::logic::rules;

/// 特定のカードが、今の盤面で上げられる組札を探すよ。
/// 組札を 0 番から順に調べて、最初に受け入れてくれた組札を返す。
pub fn find_automatic_foundation_move(state: &GameState, card: &Card) -> Option<PileId> {
    (0..FOUNDATION_COUNT as u8).find_map(|index| {
        let foundation = &state.foundations()[usize::from(index)];
        rules::is_valid_foundation_move(card, index, foundation).then_some(PileId::Foundation(index))
    })
}

// 自動移動の候補になる「一番上のカード」の場所。
// 順番: フリーセル → 場札の各列 → 捨て札
fn exposed_sources(state: &GameState) -> impl Iterator<Item = (MoveSource, &Card)> + '_ {
    let free_cells = state
        .free_cells()
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.as_ref().map(|card| (MoveSource::FreeCell(index as u8), card)));
    let columns = state.tableau().iter().enumerate().filter_map(|(column, cards)| {
        let top = cards.last().filter(|card| card.is_face_up)?;
        Some((MoveSource::Tableau { column: column as u8, offset: cards.len() - 1 }, top))
    });
    let waste = state.waste().last().map(|card| (MoveSource::Waste, card));
    free_cells.chain(columns).chain(waste)
}

/// 次に組札へ上げられる 1 手を探す。無ければ None。
pub fn find_next_foundation_move(state: &GameState) -> Option<(MoveSource, PileId)> {
    exposed_sources(state).find_map(|(source, card)| {
        find_automatic_foundation_move(state, card).map(|destination| (source, destination))
    })
}

/// 上げられるカードが無くなるまで、組札への移動を繰り返すよ。
///
/// `should_stop` は 1 手ごとの合間に呼ばれて、true を返すとそこで止まる。
/// 1 手の途中で止まることは無い。1 手ごとに組札の外のカードが 1 枚減るので、
/// 必ず終わる。
pub fn auto_move_to_foundations_until<F>(state: &mut GameState, mut should_stop: F) -> Vec<MoveRecord>
where
    F: FnMut() -> bool,
{
    let mut records = Vec::new();
    while !should_stop() {
        let Some((source, destination)) = find_next_foundation_move(state) else {
            break;
        };
        match execute_move(state, source, destination) {
            Ok(record) => {
                debug!("[AutoMove] {} -> {}", source, destination);
                records.push(record);
            }
            Err(err) => {
                warn!("[AutoMove] candidate {} -> {} was refused: {}", source, destination, err);
                break;
            }
        }
    }
    if !records.is_empty() {
        info!("[AutoMove] moved {} card(s) to the foundations", records.len());
    }
    records
}

/// 止まる条件なしで `auto_move_to_foundations_until` を回す。
pub fn auto_move_to_foundations(state: &mut GameState) -> Vec<MoveRecord> {
    auto_move_to_foundations_until(state, || false)
}
