// src/logic/executor.rs
//! 検証済みの移動を盤面に適用する「実行役」だよ！🚚
//!
//! 盤面 (`GameState`) のパイルを書き換えていいのは、ここと配札だけ。
//! カードは移動元の末尾から `split_off` で切り出して、移動先に `extend` する。
//! 同じカードを二か所から参照することは絶対に無いよ。

use log::debug;
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{MoveSource, PileId};
use crate::config::rules::FOUNDATION_CARD_POINTS;
use crate::error::EngineError;
use crate::logic::invariants::check_structure;
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste, is_won, validate_move, MovePlan};

/// 実行した 1 手の記録。レンダラーのアニメーションやログに使えるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub source: MoveSource,
    pub destination: PileId,
    /// 動いたカード (下から上の順)。
    pub cards: Vec<Card>,
    /// 移動元の場札で新しく表向きになったカード。
    pub flipped: Option<Card>,
    pub score_delta: i32,
}

/// 山札をクリックした結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// 山札から捨て札に n 枚めくった
    Drew(usize),
    /// 山札が空だったので、捨て札 n 枚を裏返して山札に戻した
    Recycled(usize),
    /// 山札も捨て札も空で、何も起きなかった
    Nothing,
}

/// 移動を検証して、合法なら盤面に適用するよ。
///
/// 反則手や範囲外の記述子ならエラーを返して、盤面には一切触らない (部分的な変更も無し)。
pub fn execute_move(
    state: &mut GameState,
    source: MoveSource,
    destination: PileId,
) -> Result<MoveRecord, EngineError> {
    let plan = validate_move(state, source, destination)?;
    Ok(apply_plan(state, plan))
}

// 検証済みの MovePlan を適用する。ここに来た時点で失敗する要素は無い。
fn apply_plan(state: &mut GameState, plan: MovePlan) -> MoveRecord {
    let cards = take_cards(state, plan.source, plan.count);
    let flipped = flip_exposed_card(state, plan.source);

    let mut score_delta = 0;
    if matches!(plan.destination, PileId::Foundation(_)) {
        score_delta += FOUNDATION_CARD_POINTS * cards.len() as i32;
    }
    if matches!(plan.source, MoveSource::Foundation(_)) {
        score_delta -= FOUNDATION_CARD_POINTS * cards.len() as i32;
    }

    put_cards(state, plan.destination, cards.clone());
    state.moves += 1;
    state.score += score_delta;
    // 組札から戻せばクリアも取り消しになる
    state.status = if is_won(state) { GameStatus::Won } else { GameStatus::Playing };

    debug!(
        "[Executor] {} -> {}: {} (flipped: {:?}, score {:+})",
        plan.source,
        plan.destination,
        cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
        flipped.map(|c| c.to_string()),
        score_delta
    );
    debug_assert!(check_structure(state).is_ok(), "{:?}", check_structure(state));

    MoveRecord { source: plan.source, destination: plan.destination, cards, flipped, score_delta }
}

fn take_cards(state: &mut GameState, source: MoveSource, count: usize) -> Vec<Card> {
    let pile = match source {
        MoveSource::FreeCell(index) => {
            return state.free_cells[usize::from(index)].take().into_iter().collect();
        }
        MoveSource::Stock => &mut state.stock,
        MoveSource::Waste => &mut state.waste,
        MoveSource::Foundation(index) => &mut state.foundations[usize::from(index)],
        MoveSource::Tableau { column, .. } => &mut state.tableau[usize::from(column)],
    };
    let start = pile.len() - count;
    pile.split_off(start)
}

// 場札から束を取った後、一番上に裏向きのカードが残ったら表に返す。
fn flip_exposed_card(state: &mut GameState, source: MoveSource) -> Option<Card> {
    let MoveSource::Tableau { column, .. } = source else {
        return None;
    };
    let top = state.tableau[usize::from(column)].last_mut()?;
    if top.is_face_up {
        return None;
    }
    top.is_face_up = true;
    Some(*top)
}

fn put_cards(state: &mut GameState, destination: PileId, cards: Vec<Card>) {
    match destination {
        PileId::FreeCell(index) => state.free_cells[usize::from(index)] = cards.into_iter().next(),
        PileId::Stock => state.stock.extend(cards),
        PileId::Waste => state.waste.extend(cards),
        PileId::Foundation(index) => state.foundations[usize::from(index)].extend(cards),
        PileId::Tableau(index) => state.tableau[usize::from(index)].extend(cards),
    }
}

/// 山札をめくる (クロンダイク)。
///
/// - 山札にカードがある: 最大 `draw_count` 枚を 1 枚ずつ表にして捨て札へ
/// - 山札が空で捨て札がある: 捨て札を逆順にして全部裏向きで山札へ戻す (何周でも OK)
/// - 両方空: 何もしない
pub fn draw_from_stock(state: &mut GameState) -> DrawOutcome {
    let outcome = if can_deal_from_stock(state.stock.is_empty()) {
        let count = state.draw_mode.count().min(state.stock.len());
        let start = state.stock.len() - count;
        let drawn = state.stock.split_off(start);
        // 山札の一番上 (末尾) から順にめくるので、最後にめくった 1 枚が捨て札の一番上
        state.waste.extend(drawn.into_iter().rev().map(|mut card| {
            card.is_face_up = true;
            card
        }));
        DrawOutcome::Drew(count)
    } else if can_reset_stock_from_waste(state.stock.is_empty(), state.waste.is_empty()) {
        let recycled: Vec<Card> = state
            .waste
            .drain(..)
            .rev()
            .map(|mut card| {
                card.is_face_up = false;
                card
            })
            .collect();
        let count = recycled.len();
        state.stock = recycled;
        DrawOutcome::Recycled(count)
    } else {
        DrawOutcome::Nothing
    };

    if outcome != DrawOutcome::Nothing {
        state.moves += 1;
    }
    debug!(
        "[Stock] {:?} (stock {}, waste {})",
        outcome,
        state.stock.len(),
        state.waste.len()
    );
    outcome
}
