//! 履歴テーブル更新のベンチマーク

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rchess_history::history::{
    ButterflyHistory, ContinuationHistory, HistoryFillValues, HistoryTables,
};
use rchess_history::stats::StatsEntry;
use rchess_history::types::{Color, Move, Piece, Square};
use std::hint::black_box;

fn random_moves(n: usize) -> Vec<(Move, i32)> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);
    (0..n)
        .map(|_| {
            let from = Square::from_u8(rng.random_range(0..64)).unwrap_or(Square::A1);
            let to = Square::from_u8(rng.random_range(0..64)).unwrap_or(Square::H8);
            (Move::new(from, to), rng.random_range(-3000..=3000))
        })
        .collect()
}

fn bench_entry_update(c: &mut Criterion) {
    c.bench_function("stats_entry_update", |b| {
        let mut entry = StatsEntry::<i16, 7183>::new();
        let mut bonus = 1;
        b.iter(|| {
            bonus = -bonus * 3 % 4001;
            entry.update(black_box(bonus));
            black_box(entry.get())
        });
    });
}

fn bench_butterfly_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("butterfly_update");
    for n in [256usize, 4096] {
        let moves = random_moves(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &moves, |b, moves| {
            let mut history = ButterflyHistory::new();
            b.iter(|| {
                for &(mv, bonus) in moves {
                    history.update(Color::White, mv, bonus);
                }
                black_box(history.get(Color::White, moves[0].0))
            });
        });
    }
    group.finish();
}

fn bench_continuation_sub_table(c: &mut Criterion) {
    let moves = random_moves(1024);
    c.bench_function("continuation_sub_table_update", |b| {
        let mut history = ContinuationHistory::new();
        b.iter(|| {
            let mut sub = history.sub_table_mut(Piece::B_KNIGHT, Square::C3);
            for &(mv, bonus) in &moves {
                sub.update(Piece::W_PAWN, mv.to(), bonus);
            }
            black_box(sub.get(Piece::W_PAWN, moves[0].0.to()))
        });
    });
}

fn bench_clear(c: &mut Criterion) {
    let fills = HistoryFillValues::default();
    let mut tables = HistoryTables::new(&fills);
    c.bench_function("history_tables_clear", |b| {
        b.iter(|| tables.clear(black_box(&fills)));
    });
}

criterion_group!(
    benches,
    bench_entry_update,
    bench_butterfly_update,
    bench_continuation_sub_table,
    bench_clear
);
criterion_main!(benches);
