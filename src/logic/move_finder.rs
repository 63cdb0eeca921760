// src/logic/move_finder.rs
//! 今の盤面で指せる手を全部並べるよ。ヒント表示や「詰み」判定に使う。

use crate::components::game_state::GameState;
use crate::components::stack::{MoveSource, PileId};
use crate::config::rules::FOUNDATION_COUNT;
use crate::logic::rules::{is_move_valid, movable_run_start};

// 持ち上げられる場所を全部集める。
fn candidate_sources(state: &GameState) -> Vec<MoveSource> {
    let mut sources = Vec::new();
    if !state.waste().is_empty() {
        sources.push(MoveSource::Waste);
    }
    for (index, slot) in state.free_cells().iter().enumerate() {
        if slot.is_some() {
            sources.push(MoveSource::FreeCell(index as u8));
        }
    }
    for (index, pile) in state.foundations().iter().enumerate() {
        if !pile.is_empty() {
            sources.push(MoveSource::Foundation(index as u8));
        }
    }
    for (column, cards) in state.tableau().iter().enumerate() {
        if let Some(start) = movable_run_start(cards) {
            sources.extend((start..cards.len()).map(|offset| MoveSource::Tableau { column: column as u8, offset }));
        }
    }
    sources
}

fn candidate_destinations(state: &GameState) -> Vec<PileId> {
    (0..FOUNDATION_COUNT as u8)
        .map(PileId::Foundation)
        .chain((0..state.tableau().len() as u8).map(PileId::Tableau))
        .chain((0..state.free_cells().len() as u8).map(PileId::FreeCell))
        .collect()
}

// 列をまるごと空き列に移すだけの手は、盤面が実質変わらないので数えない。
fn is_pointless(state: &GameState, source: MoveSource, destination: PileId) -> bool {
    match (source, destination) {
        (MoveSource::Tableau { offset: 0, .. }, PileId::Tableau(index)) => {
            state.column(usize::from(index)).is_some_and(|cards| cards.is_empty())
        }
        _ => false,
    }
}

/// 合法手を全部返すよ (山札をめくる操作は含まない)。
pub fn legal_moves(state: &GameState) -> Vec<(MoveSource, PileId)> {
    let destinations = candidate_destinations(state);
    candidate_sources(state)
        .into_iter()
        .flat_map(|source| destinations.iter().map(move |&destination| (source, destination)))
        .filter(|&(source, destination)| {
            !is_pointless(state, source, destination) && is_move_valid(state, source, destination)
        })
        .collect()
}

/// まだ何かできるか。山札か捨て札が残っていれば、めくれるので true。
pub fn has_legal_moves(state: &GameState) -> bool {
    !state.stock().is_empty() || !state.waste().is_empty() || !legal_moves(state).is_empty()
}
