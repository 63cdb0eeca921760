// src/config/game_config.rs
//! 新しいゲームを始める時の設定だよ！⚙️
//! アダプター (wasm_api) からは JSON で届くので serde で読めるようにしておく。

use serde::{Serialize, Deserialize};

use crate::components::game_state::{DrawMode, Variant};
use crate::error::ConfigError;

/// 1 ゲーム分の設定。
///
/// JSON で省略された項目はデフォルト値 (クロンダイク、1枚めくり、ランダム配札、
/// 自動で組札に送らない) になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    pub draw_mode: DrawMode,
    /// 配札の乱数シード。None なら毎回ちがう配札になる🎲
    pub seed: Option<u64>,
    /// true なら、プレイヤーの手のあとに毎回オートソルバーを走らせる。
    pub auto_foundation: bool,
}

impl GameConfig {
    pub fn klondike(draw_mode: DrawMode) -> Self {
        Self { variant: Variant::Klondike, draw_mode, ..Self::default() }
    }

    pub fn freecell() -> Self {
        Self { variant: Variant::FreeCell, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_auto_foundation(mut self, enabled: bool) -> Self {
        self.auto_foundation = enabled;
        self
    }

    /// JSON 文字列から設定を読み込むよ。空文字ならデフォルト設定。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// フリーセルには山札が無いので、めくり枚数は 1 枚に揃えておく。
    pub fn normalized(mut self) -> Self {
        if self.variant == Variant::FreeCell {
            self.draw_mode = DrawMode::One;
        }
        self
    }
}
