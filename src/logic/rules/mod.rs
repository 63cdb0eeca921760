// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも盤面を読むだけで、書き換えはしない (純粋な判定関数)。

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod freecell;
pub mod stock_waste;
pub mod win_condition;
pub mod move_validation;

#[cfg(test)]
mod tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use tableau::*;
pub use freecell::*;
pub use stock_waste::*;
pub use win_condition::*;
pub use move_validation::*;
