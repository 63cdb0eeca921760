// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*; // rules/mod.rs 経由で各ルール関数が re-export されてる
use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::{DrawMode, GameState, Variant};
use crate::components::stack::{MoveSource, PileId};
use crate::error::{DestinationRule, EngineError, MoveRejection};

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn rejection(result: Result<MovePlan, EngineError>) -> Option<MoveRejection> {
    result.err().and_then(|err| err.rejection())
}

/// フリーセルの盤面を作るよ。列 0 に Q♥ から下る色交互の束を `len` 枚、
/// 列 1 に受け皿の K♣、残りの列は関係ないカードでふさぐ (空き列なし、空きマス 4)。
fn freecell_with_run(len: usize) -> GameState {
    let mut state = GameState::empty(Variant::FreeCell, DrawMode::One);
    let suits = [Suit::Heart, Suit::Spade];
    state.tableau[0] = ALL_RANKS[..12]
        .iter()
        .rev()
        .take(len)
        .enumerate()
        .map(|(i, &rank)| up(suits[i % 2], rank))
        .collect();
    state.tableau[1] = vec![up(Suit::Club, Rank::King)];
    let fillers = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven];
    for (column, rank) in (2..8).zip(fillers) {
        state.tableau[column] = vec![up(Suit::Diamond, rank)];
    }
    state
}

// --- 各ルール関数のテスト ---

#[test]
fn test_sequence_validation() {
    assert!(is_valid_sequence(&[up(Suit::Spade, Rank::Nine)]));
    assert!(is_valid_sequence(&[up(Suit::Spade, Rank::Nine), up(Suit::Heart, Rank::Eight), up(Suit::Club, Rank::Seven)]));
    // 同じ色
    assert!(!is_valid_sequence(&[up(Suit::Spade, Rank::Nine), up(Suit::Club, Rank::Eight)]));
    // ランクが飛んでる
    assert!(!is_valid_sequence(&[up(Suit::Spade, Rank::Nine), up(Suit::Heart, Rank::Seven)]));
    // 昇順
    assert!(!is_valid_sequence(&[up(Suit::Spade, Rank::Eight), up(Suit::Heart, Rank::Nine)]));
    // 裏向きは持ち上げられない
    assert!(!is_valid_sequence(&[down(Suit::Spade, Rank::Nine)]));
    assert!(!is_valid_sequence(&[]));
}

#[test]
fn test_movable_run_start() {
    let column = vec![
        down(Suit::Club, Rank::King),
        up(Suit::Club, Rank::Six),
        up(Suit::Spade, Rank::Ten),
        up(Suit::Heart, Rank::Nine),
        up(Suit::Club, Rank::Eight),
    ];
    assert_eq!(movable_run_start(&column), Some(2));
    assert_eq!(movable_run_start(&column[..2]), Some(1));
    assert_eq!(movable_run_start(&column[..1]), None);
    assert_eq!(movable_run_start(&[]), None);
}

#[test]
fn test_foundation_rules() {
    let clubs: Vec<Card> = Vec::new();
    // 空の組札には、そのスートの A だけ
    assert!(is_valid_foundation_move(&up(Suit::Club, Rank::Ace), 2, &clubs));
    assert!(!is_valid_foundation_move(&up(Suit::Club, Rank::Two), 2, &clubs));
    assert!(!is_valid_foundation_move(&up(Suit::Heart, Rank::Ace), 2, &clubs));

    let clubs = vec![up(Suit::Club, Rank::Ace)];
    assert!(is_valid_foundation_move(&up(Suit::Club, Rank::Two), 2, &clubs));
    assert!(!is_valid_foundation_move(&up(Suit::Club, Rank::Three), 2, &clubs));
    assert!(!is_valid_foundation_move(&up(Suit::Spade, Rank::Two), 2, &clubs));
    assert_eq!(
        check_foundation_move(&up(Suit::Club, Rank::Three), 2, &clubs),
        Err(MoveRejection::DestinationRuleViolation(DestinationRule::FoundationSequence))
    );
    // 裏向きは組札に上げられない
    assert_eq!(
        check_foundation_move(&down(Suit::Club, Rank::Two), 2, &clubs),
        Err(MoveRejection::InvalidSequence)
    );
}

#[test]
fn test_two_of_clubs_scenario() {
    let mut state = GameState::empty(Variant::Klondike, DrawMode::One);
    state.waste = vec![up(Suit::Club, Rank::Two)];

    // 空の組札には置けない
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Waste, PileId::Foundation(2))),
        Some(MoveRejection::DestinationRuleViolation(DestinationRule::FoundationSequence))
    );

    // A♣ がある組札には置ける
    state.foundations[2] = vec![up(Suit::Club, Rank::Ace)];
    let plan = validate_move(&state, MoveSource::Waste, PileId::Foundation(2)).unwrap();
    assert_eq!(plan.count, 1);
}

#[test]
fn test_tableau_rules_klondike() {
    let queen_hearts = [up(Suit::Heart, Rank::Queen)];
    let king_spades = [up(Suit::Spade, Rank::King)];
    let king_diamonds = [up(Suit::Diamond, Rank::King)];

    assert!(is_valid_tableau_move(Variant::Klondike, &queen_hearts, &king_spades));
    assert_eq!(
        check_tableau_move(Variant::Klondike, &queen_hearts, &king_diamonds),
        Err(MoveRejection::DestinationRuleViolation(DestinationRule::TableauColorOrRank))
    );
    // 空き列は K だけ
    assert!(is_valid_tableau_move(Variant::Klondike, &king_spades, &[]));
    assert_eq!(
        check_tableau_move(Variant::Klondike, &queen_hearts, &[]),
        Err(MoveRejection::DestinationRuleViolation(DestinationRule::EmptyColumnNeedsKing))
    );
    // 束の並びが崩れていたら、移動先に関係なくダメ
    let broken = [up(Suit::Heart, Rank::Queen), up(Suit::Diamond, Rank::Jack)];
    assert_eq!(check_tableau_move(Variant::Klondike, &broken, &king_spades), Err(MoveRejection::InvalidSequence));
}

#[test]
fn test_tableau_rules_freecell() {
    // フリーセルの空き列には何でも置ける
    assert!(is_valid_tableau_move(Variant::FreeCell, &[up(Suit::Heart, Rank::Four)], &[]));
    assert!(is_valid_tableau_move(
        Variant::FreeCell,
        &[up(Suit::Heart, Rank::Four), up(Suit::Club, Rank::Three)],
        &[up(Suit::Club, Rank::Five)]
    ));
}

#[test]
fn test_free_cell_rules() {
    let five = [up(Suit::Heart, Rank::Five)];
    assert!(is_valid_free_cell_move(&five, &None));
    assert_eq!(
        check_free_cell_move(&five, &Some(up(Suit::Club, Rank::Two))),
        Err(MoveRejection::DestinationRuleViolation(DestinationRule::FreeCellOccupied))
    );
    let pair = [up(Suit::Heart, Rank::Five), up(Suit::Club, Rank::Four)];
    assert_eq!(
        check_free_cell_move(&pair, &None),
        Err(MoveRejection::DestinationRuleViolation(DestinationRule::FreeCellSingleCard))
    );
}

#[test]
fn test_supermove_formula() {
    let mut state = GameState::empty(Variant::FreeCell, DrawMode::One);
    // 4 空きマス、8 空き列
    assert_eq!(max_movable_cards(&state), 5 * 256);

    for column in state.tableau.iter_mut() {
        column.push(up(Suit::Club, Rank::Two));
    }
    for (index, rank) in [Rank::Three, Rank::Four, Rank::Five].into_iter().enumerate() {
        state.free_cells[index] = Some(up(Suit::Heart, rank));
    }
    // 1 空きマス、0 空き列 → 2
    assert_eq!(max_movable_cards(&state), 2);

    state.tableau[7].clear();
    state.tableau[6].clear();
    // 1 空きマス、2 空き列 → 8。空き列へ運ぶならその列は数えない → 4
    assert_eq!(max_movable_cards(&state), 8);
    assert_eq!(max_movable_cards_to(&state, PileId::Tableau(7)), 4);
    assert_eq!(max_movable_cards_to(&state, PileId::Tableau(0)), 8);

    // クロンダイクには制限が無い
    let klondike = GameState::empty(Variant::Klondike, DrawMode::One);
    assert_eq!(max_movable_cards(&klondike), usize::MAX);
}

#[test]
fn test_supermove_scenario_one_free_cell() {
    // Q♥ J♠ 10♥ を作って、空きマス 1 つ、空き列 0 にする
    let mut state = freecell_with_run(3);
    assert_eq!(state.tableau[0].len(), 3);
    state.free_cells[0] = Some(up(Suit::Diamond, Rank::Eight));
    state.free_cells[1] = Some(up(Suit::Diamond, Rank::Nine));
    state.free_cells[2] = Some(up(Suit::Diamond, Rank::Ten));
    assert_eq!(max_movable_cards(&state), 2);

    // 3 枚まとめて K♣ へ: 容量オーバー
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 0, offset: 0 }, PileId::Tableau(1))),
        Some(MoveRejection::SupermoveCapacityExceeded { requested: 3, capacity: 2 })
    );

    // 2 枚 (J♠ 10♥) なら OK。移動先として Q♦ を置いた列を用意
    state.tableau[2] = vec![up(Suit::Diamond, Rank::Queen)];
    let plan = validate_move(&state, MoveSource::Tableau { column: 0, offset: 1 }, PileId::Tableau(2)).unwrap();
    assert_eq!(plan.count, 2);
}

#[test]
fn test_supermove_bound_is_tight() {
    // 空きマス 2 つ、空き列 1 つ → (2+1) × 2 = 6 枚まで
    let prepare = |len: usize| {
        let mut state = freecell_with_run(len);
        state.tableau[2].clear();
        state.free_cells[0] = Some(up(Suit::Diamond, Rank::Eight));
        state.free_cells[1] = Some(up(Suit::Diamond, Rank::Nine));
        state
    };

    let six = prepare(6);
    assert_eq!(max_movable_cards_to(&six, PileId::Tableau(1)), 6);
    assert!(is_move_valid(&six, MoveSource::Tableau { column: 0, offset: 0 }, PileId::Tableau(1)));

    let seven = prepare(7);
    assert_eq!(
        rejection(validate_move(&seven, MoveSource::Tableau { column: 0, offset: 0 }, PileId::Tableau(1))),
        Some(MoveRejection::SupermoveCapacityExceeded { requested: 7, capacity: 6 })
    );

    // 空き列そのものへ運ぶなら、その列は仮置き場にならない → (2+1) × 1 = 3 枚まで
    assert_eq!(
        rejection(validate_move(&seven, MoveSource::Tableau { column: 0, offset: 1 }, PileId::Tableau(2))),
        Some(MoveRejection::SupermoveCapacityExceeded { requested: 6, capacity: 3 })
    );
    assert!(is_move_valid(&seven, MoveSource::Tableau { column: 0, offset: 4 }, PileId::Tableau(2)));
    assert!(!is_move_valid(&seven, MoveSource::Tableau { column: 0, offset: 3 }, PileId::Tableau(2)));
}

#[test]
fn test_source_descriptors() {
    let mut state = GameState::empty(Variant::Klondike, DrawMode::One);
    state.tableau[0] = vec![down(Suit::Club, Rank::Four), up(Suit::Heart, Rank::Nine)];
    state.tableau[1] = vec![up(Suit::Spade, Rank::Ten)];
    state.stock = vec![down(Suit::Spade, Rank::Ace)];

    // 裏向きのカードから持ち上げるのは無効な並び
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 0, offset: 0 }, PileId::Tableau(1))),
        Some(MoveRejection::InvalidSequence)
    );
    // 山札から直接は動かせない (めくる操作を使う)
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Stock, PileId::Foundation(3))),
        Some(MoveRejection::InvalidSequence)
    );
    // 空のパイル
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Waste, PileId::Tableau(1))),
        Some(MoveRejection::EmptySource)
    );
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 5, offset: 0 }, PileId::Tableau(1))),
        Some(MoveRejection::EmptySource)
    );
    // 同じ列へ
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 1, offset: 0 }, PileId::Tableau(1))),
        Some(MoveRejection::DestinationRuleViolation(DestinationRule::SamePile))
    );
    // 捨て札には置けない
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 1, offset: 0 }, PileId::Waste)),
        Some(MoveRejection::DestinationRuleViolation(DestinationRule::NotADropTarget))
    );
    // 束は組札に上げられない
    state.tableau[2] = vec![up(Suit::Spade, Rank::Two), up(Suit::Heart, Rank::Ace)];
    state.foundations[3] = vec![up(Suit::Spade, Rank::Ace)];
    assert_eq!(
        rejection(validate_move(&state, MoveSource::Tableau { column: 2, offset: 0 }, PileId::Foundation(3))),
        Some(MoveRejection::DestinationRuleViolation(DestinationRule::FoundationSingleCard))
    );
}

#[test]
fn test_contract_violations() {
    let mut state = GameState::empty(Variant::Klondike, DrawMode::One);
    state.tableau[0] = vec![up(Suit::Heart, Rank::Nine)];

    let out_of_range = [
        (MoveSource::Tableau { column: 0, offset: 3 }, PileId::Tableau(1)),
        (MoveSource::Tableau { column: 9, offset: 0 }, PileId::Tableau(1)),
        (MoveSource::Foundation(4), PileId::Tableau(1)),
        // クロンダイクにはフリーセルが無い
        (MoveSource::FreeCell(0), PileId::Tableau(1)),
        (MoveSource::Tableau { column: 0, offset: 0 }, PileId::FreeCell(0)),
        (MoveSource::Tableau { column: 0, offset: 0 }, PileId::Tableau(7)),
    ];
    for (source, destination) in out_of_range {
        let err = validate_move(&state, source, destination).unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidDescriptor { .. }),
            "{} -> {} should be a contract violation, got {:?}",
            source,
            destination,
            err
        );
    }
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
}

#[test]
fn test_win_condition() {
    let mut state = GameState::empty(Variant::Klondike, DrawMode::One);
    assert!(!is_won(&state), "組札が空ならクリアじゃないはず！🙅");

    for (index, suit) in ALL_SUITS.into_iter().enumerate() {
        state.foundations[index] = ALL_RANKS.iter().map(|&rank| up(suit, rank)).collect();
    }
    assert!(is_won(&state), "全部そろえばクリアなはず！🏆");

    state.foundations[1].pop();
    assert!(!is_won(&state), "1 枚でも足りなければクリアじゃないはず！🙅");
}
