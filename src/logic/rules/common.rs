//! ルール判定で共通して使うヘルパー関数を置くよ。

use itertools::Itertools;

use crate::components::card::{Card, Suit, ALL_SUITS};

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(usize::from(foundation_index)).copied()
}

/// `upper` の上に `lower` を重ねられるか (色違い、かつランクがちょうど 1 小さい)。
pub fn stacks_on(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color() && lower.rank.value() + 1 == upper.rank.value()
}

/// 持ち上げたカードの束が、ひとかたまりで動かせる並びになってるかチェック！
///
/// - 全部表向き (裏向きのカードは持ち上げられない)
/// - 下から上に向かって色が交互、ランクが 1 ずつ下がる
///
/// 空の束は「動かせる並び」とは言わないので false。
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    !cards.is_empty()
        && cards.iter().all(|card| card.is_face_up)
        && cards.iter().tuple_windows().all(|(upper, lower)| stacks_on(lower, upper))
}

/// 列の中で、ひとかたまりで動かせる一番長い末尾の束が何枚目から始まるか。
/// 空の列、または一番上が裏向きの列なら None。
pub fn movable_run_start(column: &[Card]) -> Option<usize> {
    let top = column.len().checked_sub(1)?;
    if !column[top].is_face_up {
        return None;
    }
    let mut start = top;
    while start > 0 {
        let (upper, lower) = (&column[start - 1], &column[start]);
        if !upper.is_face_up || !stacks_on(lower, upper) {
            break;
        }
        start -= 1;
    }
    Some(start)
}
