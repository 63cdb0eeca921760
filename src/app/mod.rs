// src/app/mod.rs
//! 外の世界 (UI 層や JavaScript) とゲームのロジックをつなぐモジュールだよ！

pub mod session;
pub mod wasm_api;
