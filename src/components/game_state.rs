// src/components/game_state.rs

// serde を使う宣言！レンダラーへのスナップショットは JSON で渡すよ。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::stack::PileId;
use crate::config::rules::{FOUNDATION_COUNT, FREECELL_COLUMNS, FREECELL_SLOTS, KLONDIKE_COLUMNS};
use crate::error::ConfigError;

/// 遊んでいるソリティアの種類だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Klondike,
    FreeCell,
}

impl Variant {
    /// 場札の列数。クロンダイクは 7、フリーセルは 8。
    pub fn tableau_columns(self) -> usize {
        match self {
            Variant::Klondike => KLONDIKE_COLUMNS,
            Variant::FreeCell => FREECELL_COLUMNS,
        }
    }

    /// フリーセルの空きマス数。クロンダイクには無いので 0！
    pub fn free_cell_slots(self) -> usize {
        match self {
            Variant::Klondike => 0,
            Variant::FreeCell => FREECELL_SLOTS,
        }
    }
}

/// 山札から一度に何枚めくるか (1枚 or 3枚)。
///
/// JSON では数字 (`1` / `3`) として読み書きするよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(ConfigError::InvalidDrawCount(other)),
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> u8 {
        mode.count() as u8
    }
}

/// ゲーム全体の現在の状態だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！全部の組札が K まで揃った🏆
    Won,
}

/// 1 ゲーム分の状態をまるごと持つ構造体。
///
/// 各パイルは `Vec<Card>` で、末尾が「一番上」。カードは必ずどこか 1 か所に
/// だけ存在する (参照の共有はしない)。中身を書き換えられるのは
/// `logic::executor` と配札 (`systems::deal_system`) だけなので、
/// フィールドは `pub(crate)` にして外には読み取り用のメソッドだけ見せるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) variant: Variant,
    pub(crate) draw_mode: DrawMode,
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub(crate) tableau: Vec<Vec<Card>>,
    pub(crate) free_cells: Vec<Option<Card>>,
    pub(crate) moves: u32,
    pub(crate) score: i32,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// カードが 1 枚も無い、空っぽの盤面を作るよ。配札はこのあと。
    pub(crate) fn empty(variant: Variant, draw_mode: DrawMode) -> Self {
        Self {
            variant,
            draw_mode,
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: std::array::from_fn(|_| Vec::new()),
            tableau: vec![Vec::new(); variant.tableau_columns()],
            free_cells: vec![None; variant.free_cell_slots()],
            moves: 0,
            score: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn foundation(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Vec::as_slice)
    }

    pub fn tableau(&self) -> &[Vec<Card>] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    pub fn free_cells(&self) -> &[Option<Card>] {
        &self.free_cells
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 指定したパイルの一番上のカード。範囲外や空なら None。
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        match pile {
            PileId::Stock => self.stock.last(),
            PileId::Waste => self.waste.last(),
            PileId::Foundation(i) => self.foundations.get(usize::from(i))?.last(),
            PileId::Tableau(i) => self.tableau.get(usize::from(i))?.last(),
            PileId::FreeCell(i) => self.free_cells.get(usize::from(i))?.as_ref(),
        }
    }

    /// パイルが存在するなら、その枚数を返すよ。存在しないパイルは None。
    pub fn pile_len(&self, pile: PileId) -> Option<usize> {
        match pile {
            PileId::Stock => Some(self.stock.len()),
            PileId::Waste => Some(self.waste.len()),
            PileId::Foundation(i) => self.foundations.get(usize::from(i)).map(Vec::len),
            PileId::Tableau(i) => self.tableau.get(usize::from(i)).map(Vec::len),
            PileId::FreeCell(i) => self
                .free_cells
                .get(usize::from(i))
                .map(|slot| usize::from(slot.is_some())),
        }
    }

    /// 盤面上の全カードを順番に見て回るイテレータ。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
            .chain(self.free_cells.iter().flatten())
    }

    /// 組札以外に残っているカードの枚数。オートソルバーが 1 手ごとに減らしていく値だよ。
    pub fn cards_outside_foundations(&self) -> usize {
        let in_foundations: usize = self.foundations.iter().map(Vec::len).sum();
        self.all_cards().count() - in_foundations
    }

    pub fn empty_free_cells(&self) -> usize {
        self.free_cells.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn empty_tableau_columns(&self) -> usize {
        self.tableau.iter().filter(|column| column.is_empty()).count()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn empty_state_has_variant_shape() {
        let klondike = GameState::empty(Variant::Klondike, DrawMode::One);
        assert_eq!(klondike.tableau().len(), 7);
        assert!(klondike.free_cells().is_empty());
        assert_eq!(klondike.status(), GameStatus::Playing);
        assert_eq!(klondike.moves(), 0);
        assert_eq!(klondike.score(), 0);

        let freecell = GameState::empty(Variant::FreeCell, DrawMode::One);
        assert_eq!(freecell.tableau().len(), 8);
        assert_eq!(freecell.free_cells().len(), 4);
        assert_eq!(freecell.empty_free_cells(), 4);
        assert_eq!(freecell.empty_tableau_columns(), 8);
    }

    #[test]
    fn top_card_and_pile_len() {
        let mut state = GameState::empty(Variant::FreeCell, DrawMode::One);
        state.tableau[2].push(Card::face_up(Suit::Club, Rank::Nine));
        state.free_cells[1] = Some(Card::face_up(Suit::Heart, Rank::Ace));

        assert_eq!(state.top_card(PileId::Tableau(2)), Some(&Card::face_up(Suit::Club, Rank::Nine)));
        assert_eq!(state.top_card(PileId::FreeCell(1)).map(|c| c.rank), Some(Rank::Ace));
        assert_eq!(state.top_card(PileId::FreeCell(0)), None);
        assert_eq!(state.pile_len(PileId::FreeCell(1)), Some(1));
        assert_eq!(state.pile_len(PileId::FreeCell(9)), None);
        assert_eq!(state.pile_len(PileId::Tableau(8)), None);
        assert_eq!(state.cards_outside_foundations(), 2);
    }

    #[test]
    fn draw_mode_reads_numbers_from_json() {
        let three: DrawMode = serde_json::from_str("3").unwrap();
        assert_eq!(three, DrawMode::Three);
        assert_eq!(serde_json::to_string(&DrawMode::One).unwrap(), "1");
        assert!(serde_json::from_str::<DrawMode>("2").is_err());
    }
}
