//! 公開 API を通した履歴テーブルのシナリオテスト

use std::collections::HashSet;

use rchess_history::history::{
    HistoryFillValues, HistoryTables, KNIGHT_INDEX_NUM, StatsType, knight_attack_index,
};
use rchess_history::stats::{StatsEntry, StatsError, StatsTable};
use rchess_history::types::{Color, Move, Piece, Square, knight_attacks};

#[test]
fn bounded_entry_scenario() {
    let mut entry = StatsEntry::<i16, 100>::new();
    entry.update(50);
    assert_eq!(entry.get(), 50);
    entry.update(50);
    assert_eq!(entry.get(), 75);
    entry.update(-200);
    assert_eq!(entry.get(), -100);
}

#[test]
fn table_marker_round_trip() {
    let shape = [3, 4, 5];
    let mut table = StatsTable::<i32, 1_000_000, 3>::new(shape);

    let mut marker = 1;
    for i in 0..shape[0] {
        for j in 0..shape[1] {
            for k in 0..shape[2] {
                table[[i, j, k]].set(marker);
                marker += 1;
            }
        }
    }

    let mut expected = 1;
    for i in 0..shape[0] {
        for j in 0..shape[1] {
            for k in 0..shape[2] {
                assert_eq!(table.get([i, j, k]), expected, "marker at [{i}, {j}, {k}]");
                expected += 1;
            }
        }
    }
    // 全マーカーが互いに異なる = どのセルも他の座標と共有されていない
    let distinct: HashSet<i32> = table.iter().map(|e| e.get()).collect();
    assert_eq!(distinct.len(), table.len());
}

#[test]
fn table_shape_errors() {
    assert_eq!(
        StatsTable::<i16, 100, 2>::try_new([0, 4]).err(),
        Some(StatsError::EmptyDimension { dim: 0 })
    );
    assert!(matches!(
        StatsTable::<i16, 100, 2>::try_new([usize::MAX, 2]),
        Err(StatsError::CapacityOverflow { .. })
    ));
}

#[test]
fn knight_index_is_injective_on_non_empty_subsets() {
    for from in Square::all() {
        let mut seen = HashSet::new();
        for subset in knight_attacks(from).subsets().filter(|s| !s.is_empty()) {
            let idx = knight_attack_index(subset, from);
            assert!(idx < KNIGHT_INDEX_NUM);
            assert!(seen.insert(idx), "collision at {from} for {:#x}", subset.raw());
        }
    }
}

#[test]
fn search_like_update_sequence() {
    let fills = HistoryFillValues::default();
    let mut tables = HistoryTables::new(&fills);

    let best = Move::from_uci("g1f3").unwrap();
    let tried = Move::from_uci("b1c3").unwrap();
    let bonus = 1200;
    let malus = 1600;
    tables.main_history.update(Color::White, best, bonus);
    tables.main_history.update(Color::White, tried, -malus);

    assert!(tables.main_history.get(Color::White, best) > fills.main_history as i16);
    assert!(tables.main_history.get(Color::White, tried) < fills.main_history as i16);

    let mut cont = tables.continuation_mut(false, StatsType::NoCaptures).sub_table_mut(
        Piece::B_PAWN,
        Square::E5,
    );
    cont.update(Piece::W_KNIGHT, best.to(), bonus);
    assert!(cont.get(Piece::W_KNIGHT, best.to()) > fills.continuation_history as i16);

    tables.clear(&fills);
    assert_eq!(tables.main_history.get(Color::White, best), fills.main_history as i16);
    assert_eq!(
        tables.continuation(false, StatsType::NoCaptures).get(
            Piece::B_PAWN,
            Square::E5,
            Piece::W_KNIGHT,
            best.to()
        ),
        fills.continuation_history as i16
    );
}

#[test]
fn deserialized_fill_values_cannot_break_bound() {
    // serde 直読みは option の clamp を通らない
    let fills: HistoryFillValues =
        toml::from_str("main_history = 20000\npawn_correction = -40000\n").unwrap();
    assert_eq!(fills.main_history, 20000);

    let mut tables = HistoryTables::new(&fills);
    let mv = Move::from_uci("e2e4").unwrap();
    assert_eq!(tables.main_history.get(Color::White, mv), 7183);
    assert_eq!(tables.pawn_correction_history.get(17, Color::Black), -1024);

    tables.main_history.update(Color::White, mv, 100);
    assert_eq!(tables.main_history.get(Color::White, mv), 7183);
    tables.pawn_correction_history.update(17, Color::Black, -100);
    assert_eq!(tables.pawn_correction_history.get(17, Color::Black), -1024);
}
