use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweep_core::*;

fn new_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_game");
    for difficulty in Difficulty::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &difficulty,
            |b, &difficulty| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed = seed.wrapping_add(1);
                    black_box(BoardEngine::with_seed(difficulty, seed))
                })
            },
        );
    }
    group.finish();
}

fn adjacency_sweep(c: &mut Criterion) {
    let engine = BoardEngine::with_seed(Difficulty::Expert, 42);
    c.bench_function("adjacent_mine_count/expert", |b| {
        b.iter(|| {
            engine
                .iter_cells()
                .map(|(coords, _)| engine.mine_layout().adjacent_mine_count(coords) as u32)
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, new_game, adjacency_sweep);
criterion_main!(benches);
