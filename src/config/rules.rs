// src/config/rules.rs
//! ルールまわりの定数を定義するよ！
//! 列の数とか、配る枚数とか、点数とか。

pub const DECK_SIZE: usize = 52; // 標準デッキの枚数
pub const FOUNDATION_COUNT: usize = 4; // 組札はスートごとに 1 つ
pub const CARDS_PER_FOUNDATION: usize = 13; // A から K まで

pub const KLONDIKE_COLUMNS: usize = 7; // クロンダイクの場札の列数
pub const FREECELL_COLUMNS: usize = 8; // フリーセルの場札の列数
pub const FREECELL_SLOTS: usize = 4; // フリーセルの空きマスの数

// フリーセルの配り方: 左の 4 列に 7 枚、右の 4 列に 6 枚
pub const FREECELL_LONG_COLUMN_CARDS: usize = 7;
pub const FREECELL_SHORT_COLUMN_CARDS: usize = 6;
pub const FREECELL_LONG_COLUMNS: usize = 4;

/// 組札に 1 枚載せるごとのスコア。
pub const FOUNDATION_CARD_POINTS: i32 = 10;
