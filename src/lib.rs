// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カード、パイル、盤面
pub mod config;     // ルール定数とゲーム設定
pub mod error;
pub mod logic;      // ルール判定、移動の実行、自動移動
pub mod systems;    // 配札
pub mod app;        // セッションと JS 向けの窓口

pub use app::session::{Session, SessionObserver};
pub use app::wasm_api::SolitaireApp;
pub use components::{Card, DrawMode, GameState, GameStatus, MoveSource, PileId, Rank, Suit, Variant};
pub use config::GameConfig;
pub use error::{ConfigError, DestinationRule, EngineError, MoveRejection};
pub use logic::executor::{DrawOutcome, MoveRecord};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log::info!("Panic hook set!");
}
