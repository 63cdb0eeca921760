// src/config/mod.rs
//! ルール定数とゲーム設定をまとめるモジュール。

pub mod rules;
pub mod game_config;

pub use game_config::GameConfig;
