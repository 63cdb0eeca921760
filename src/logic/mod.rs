// src/logic/mod.rs
//! ゲームのルールと、盤面を動かす処理をまとめるモジュールだよ！
//! 中身はぜんぶ純粋な Rust で、画面や入力のことは何も知らない。

pub mod deck;
pub mod rules;
pub mod executor;
pub mod auto_move;
pub mod move_finder;
pub mod invariants;
