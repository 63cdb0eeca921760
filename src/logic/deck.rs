// src/logic/deck.rs

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートとランクの組み合わせで全種類作る。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`)！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

/// カードの並びをその場でシャッフルする関数だよ (Fisher–Yates)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// 元の並びには触らずに、シャッフルしたコピーを返すよ。
pub fn shuffled<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut copy = cards.to_vec();
    shuffle_deck(&mut copy, rng);
    copy
}

/// 配札用の乱数生成器。シードがあれば再現できる配札になるよ。
pub fn deal_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
