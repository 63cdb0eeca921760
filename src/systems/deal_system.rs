// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::{DrawMode, GameState, Variant};
use crate::config::game_config::GameConfig;
use crate::config::rules::{
    DECK_SIZE, FREECELL_LONG_COLUMNS, FREECELL_LONG_COLUMN_CARDS, FREECELL_SHORT_COLUMN_CARDS,
};
use crate::logic::deck::{create_standard_deck, deal_rng, shuffle_deck};

// === 初期カード配置システム！ ===
// ゲーム開始時に、デッキを作ってシャッフルして、遊ぶ種類に合わせて配る役割だよ。
// 状態を持たないので Default で作れる。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// 設定どおりに新しい盤面を作るよ！🎉
    ///
    /// 1. 52枚のデッキ (全部裏向き) を作る。
    /// 2. シードがあればそのシードで、無ければランダムにシャッフル。
    /// 3. `deal` でルールどおりに配る。
    pub fn execute(&self, config: &GameConfig) -> GameState {
        let config = config.normalized();
        let mut deck = create_standard_deck();
        let mut rng = deal_rng(config.seed);
        shuffle_deck(&mut deck, &mut rng);
        info!("🃏 New {:?} game (seed: {:?}, draw {})", config.variant, config.seed, config.draw_mode.count());
        self.deal(config.variant, config.draw_mode, deck)
    }

    /// 並び順が決まったデッキを配る。`deck` の先頭から順番に使うよ。
    ///
    /// - クロンダイク: i 列目に i+1 枚、一番上だけ表向き。残り 24 枚は裏向きの山札。
    /// - フリーセル: 8 列、左 4 列に 7 枚、右 4 列に 6 枚、全部表向き。
    pub fn deal(&self, variant: Variant, draw_mode: DrawMode, deck: Vec<Card>) -> GameState {
        debug_assert_eq!(deck.len(), DECK_SIZE, "デッキの枚数がおかしい！");
        let mut state = GameState::empty(variant, draw_mode);
        let mut cards = deck.into_iter();

        match variant {
            Variant::Klondike => {
                for (index, column) in state.tableau.iter_mut().enumerate() {
                    column.extend(cards.by_ref().take(index + 1).map(|mut card| {
                        card.is_face_up = false;
                        card
                    }));
                    if let Some(top) = column.last_mut() {
                        top.is_face_up = true;
                    }
                }
                // 残りは全部山札へ。末尾が一番上 (次にめくるカード) になる
                state.stock.extend(cards.map(|mut card| {
                    card.is_face_up = false;
                    card
                }));
            }
            Variant::FreeCell => {
                for (index, column) in state.tableau.iter_mut().enumerate() {
                    let count = if index < FREECELL_LONG_COLUMNS {
                        FREECELL_LONG_COLUMN_CARDS
                    } else {
                        FREECELL_SHORT_COLUMN_CARDS
                    };
                    column.extend(cards.by_ref().take(count).map(|mut card| {
                        card.is_face_up = true;
                        card
                    }));
                }
            }
        }

        debug!(
            "Dealt {:?}: tableau {:?}, stock {}",
            variant,
            state.tableau.iter().map(Vec::len).collect::<Vec<_>>(),
            state.stock.len()
        );
        state
    }
}

/// 新しいゲームの盤面を作るショートカット。
pub fn setup(config: &GameConfig) -> GameState {
    DealInitialCardsSystem.execute(config)
}
