// src/app/session.rs
//! 1 ゲーム分の盤面を持って、外 (UI 層) からの操作を受け付けるセッションだよ！🎮
//!
//! 入力層は「どこからどこへ」を伝えるだけ。合法かどうかの判断と盤面の更新は
//! 全部ここから engine に任せて、結果をオブザーバーに知らせる。
//! 盤面を持っているのはこのセッションだけで、呼び出しは全部同期的に完了するよ。

use log::{debug, info};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{MoveSource, PileId};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::logic::auto_move::{auto_move_to_foundations, auto_move_to_foundations_until};
use crate::logic::executor::{draw_from_stock, execute_move, DrawOutcome, MoveRecord};
use crate::logic::move_finder;
use crate::systems::deal_system::DealInitialCardsSystem;

/// 盤面の変化を受け取る側 (レンダラーなど)。
pub trait SessionObserver {
    /// 盤面が変わるたびに呼ばれる。
    fn on_state_changed(&mut self, state: &GameState);

    /// クリアした瞬間に、1 ゲームにつき 1 回だけ呼ばれる。
    fn on_win(&mut self, _state: &GameState) {}
}

pub struct Session {
    config: GameConfig,
    state: GameState,
    observer: Option<Box<dyn SessionObserver>>,
    // このゲームで on_win をもう呼んだか
    win_notified: bool,
}

impl Session {
    /// 設定どおりにカードを配って、新しいセッションを作るよ。
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let state = DealInitialCardsSystem.execute(&config);
        Self { config, state, observer: None, win_notified: false }
    }

    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Option<Box<dyn SessionObserver>>) {
        self.observer = observer;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.status() == GameStatus::Won
    }

    /// 今の盤面を捨てて、新しい設定で配り直す。
    pub fn new_game(&mut self, config: GameConfig) {
        self.config = config.normalized();
        self.state = DealInitialCardsSystem.execute(&self.config);
        self.win_notified = false;
        info!("[Session] new game: {:?}", self.config);
        self.after_mutation();
    }

    /// 入力層から届いた「この束をここへ」を試す。
    ///
    /// 反則手なら盤面はそのままでエラーを返すよ。成功したら、先頭がプレイヤーの 1 手の記録。
    /// `auto_foundation` が有効なら、そのあと組札へ自動で上げた手が順に続く。
    pub fn attempt_move(&mut self, source: MoveSource, destination: PileId) -> Result<Vec<MoveRecord>, EngineError> {
        let record = execute_move(&mut self.state, source, destination).inspect_err(|err| {
            debug!("[Session] rejected {} -> {}: {}", source, destination, err);
        })?;
        let mut records = vec![record];
        if self.config.auto_foundation {
            records.extend(auto_move_to_foundations(&mut self.state));
        }
        self.after_mutation();
        Ok(records)
    }

    /// 山札をクリックした。
    pub fn draw(&mut self) -> DrawOutcome {
        let outcome = draw_from_stock(&mut self.state);
        if outcome != DrawOutcome::Nothing {
            self.after_mutation();
        }
        outcome
    }

    /// 組札へ上げられるカードを全部上げる。
    pub fn request_auto_solve(&mut self) -> Vec<MoveRecord> {
        self.request_auto_solve_until(|| false)
    }

    /// `request_auto_solve` の途中で止められる版。`should_stop` は 1 手ごとの合間に呼ばれる。
    pub fn request_auto_solve_until<F>(&mut self, should_stop: F) -> Vec<MoveRecord>
    where
        F: FnMut() -> bool,
    {
        let records = auto_move_to_foundations_until(&mut self.state, should_stop);
        if !records.is_empty() {
            self.after_mutation();
        }
        records
    }

    pub fn legal_moves(&self) -> Vec<(MoveSource, PileId)> {
        move_finder::legal_moves(&self.state)
    }

    pub fn has_legal_moves(&self) -> bool {
        move_finder::has_legal_moves(&self.state)
    }

    // 盤面が変わったあとの通知をまとめて出す。
    fn after_mutation(&mut self) {
        let newly_won = self.state.status() == GameStatus::Won && !self.win_notified;
        if newly_won {
            self.win_notified = true;
            info!("[Session] 🎉 cleared in {} moves, score {}", self.state.moves(), self.state.score());
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_state_changed(&self.state);
            if newly_won {
                observer.on_win(&self.state);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(config: GameConfig, state: GameState) -> Self {
        Self { config, state, observer: None, win_notified: false }
    }
}
