// src/app/wasm_api.rs
//! JavaScript 側から使うための窓口だよ！🌉
//!
//! やりとりは全部 JSON 文字列。移動元は `{"Tableau":{"column":3,"offset":4}}` や `"Waste"`、
//! 移動先は `{"Foundation":0}` みたいな形で渡してね。

use js_sys::Function;
use log::{error, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::session::{Session, SessionObserver};
use crate::components::game_state::GameState;
use crate::components::stack::{MoveSource, PileId};
use crate::config::GameConfig;

// JS のコールバックをオブザーバーとしてつなぐ。
#[derive(Clone, Default)]
struct JsCallbacks {
    on_state_changed: Option<Function>,
    on_win: Option<Function>,
}

impl JsCallbacks {
    fn notify(callback: &Option<Function>, state: &GameState) {
        let Some(callback) = callback else { return };
        match serde_json::to_string(state) {
            Ok(json) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    warn!("[WasmApi] callback threw: {:?}", e);
                }
            }
            Err(e) => error!("[WasmApi] failed to serialize state for callback: {}", e),
        }
    }
}

impl SessionObserver for JsCallbacks {
    fn on_state_changed(&mut self, state: &GameState) {
        Self::notify(&self.on_state_changed, state);
    }

    fn on_win(&mut self, state: &GameState) {
        Self::notify(&self.on_win, state);
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        let error_msg = format!("Failed to serialize: {}", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })
}

fn parse_config(config_json: &str) -> Result<GameConfig, JsValue> {
    GameConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct SolitaireApp {
    session: Session,
    callbacks: JsCallbacks,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `{"variant":"FreeCell","seed":42}` のような設定 JSON から作る。空文字ならデフォルト (クロンダイク 1 枚めくり)。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<SolitaireApp, JsValue> {
        let config = parse_config(config_json)?;
        Ok(Self { session: Session::new(config), callbacks: JsCallbacks::default() })
    }

    pub fn new_game(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = parse_config(config_json)?;
        self.session.new_game(config);
        Ok(())
    }

    /// ドロップが完了したときに呼ぶ。成功したら MoveRecord の JSON 配列 (先頭が自分の手、続いて自動で上がった手)、
    /// 反則手ならエラー文字列。
    pub fn attempt_move(&mut self, source_json: &str, destination_json: &str) -> Result<String, JsValue> {
        let source: MoveSource = serde_json::from_str(source_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid move source {}: {}", source_json, e)))?;
        let destination: PileId = serde_json::from_str(destination_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid destination {}: {}", destination_json, e)))?;
        let records = self
            .session
            .attempt_move(source, destination)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_json(&records)
    }

    /// 山札をクリックした。結果 (`{"Drew":3}` / `{"Recycled":24}` / `"Nothing"`) を返す。
    pub fn draw(&mut self) -> Result<String, JsValue> {
        let outcome = self.session.draw();
        to_json(&outcome)
    }

    /// 組札に上げられるカードを全部上げて、その手順を JSON 配列で返す。
    pub fn request_auto_solve(&mut self) -> Result<String, JsValue> {
        let records = self.session.request_auto_solve();
        to_json(&records)
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(self.session.state())
    }

    pub fn legal_moves_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.legal_moves())
    }

    pub fn has_legal_moves(&self) -> bool {
        self.session.has_legal_moves()
    }

    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    /// 盤面が変わるたびに、盤面の JSON を引数にして呼ばれる。
    pub fn set_on_state_changed(&mut self, callback: Option<Function>) {
        self.callbacks.on_state_changed = callback;
        self.session.set_observer(Some(Box::new(self.callbacks.clone())));
    }

    /// クリアしたときに 1 回だけ呼ばれる。
    pub fn set_on_win(&mut self, callback: Option<Function>) {
        self.callbacks.on_win = callback;
        self.session.set_observer(Some(Box::new(self.callbacks.clone())));
    }
}
