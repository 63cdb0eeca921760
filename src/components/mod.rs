// src/components/mod.rs

// ゲームのデータ部品 (カード、パイルの場所、盤面) をまとめるモジュールだよ！
pub mod card;
pub mod stack;
pub mod game_state;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use stack::{MoveSource, PileId};
pub use game_state::{DrawMode, GameState, GameStatus, Variant};
