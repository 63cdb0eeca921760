// src/components/stack.rs

// serde を使うためにインポート！入力レイヤーから JSON で場所が届くからね。
use serde::{Serialize, Deserialize};
use std::fmt;

/// カードが置かれる場所 (パイル) を示す Enum だよ。
/// 移動先 (destination) はいつもこれで指定する！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 山札 (Stock)。クロンダイクだけ。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。0: Heart, 1: Diamond, 2: Club, 3: Spade
    Foundation(u8),
    /// 場札 (Tableau) の列番号。クロンダイクは 0-6、フリーセルは 0-7。
    Tableau(u8),
    /// フリーセルの空きマス (0-3)。フリーセルだけ。
    FreeCell(u8),
}

/// 動かしたいカードがどこから来るかを示す Enum だよ。
///
/// 場札だけは「何枚目から持ち上げたか」(`offset`、0 が一番下) が必要！
/// それ以外は常に一番上の 1 枚だけが動く。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveSource {
    Stock,
    Waste,
    Foundation(u8),
    Tableau { column: u8, offset: usize },
    FreeCell(u8),
}

impl MoveSource {
    /// 持ち上げ元のパイル。
    pub fn pile(&self) -> PileId {
        match *self {
            MoveSource::Stock => PileId::Stock,
            MoveSource::Waste => PileId::Waste,
            MoveSource::Foundation(i) => PileId::Foundation(i),
            MoveSource::Tableau { column, .. } => PileId::Tableau(column),
            MoveSource::FreeCell(i) => PileId::FreeCell(i),
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
            PileId::FreeCell(i) => write!(f, "FreeCell({})", i),
        }
    }
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Tableau { column, offset } => write!(f, "Tableau({})[{}..]", column, offset),
            other => write!(f, "{}", other.pile()),
        }
    }
}
