use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakes_ladders::board::TransitionTable;
use snakes_ladders::core::{EngineConfig, Square};
use snakes_ladders::engine::MoveEngine;

fn full_game(c: &mut Criterion) {
    c.bench_function("classic game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut engine = MoveEngine::classic(seed);
            engine.play_to_finish(10_000);
            black_box(engine.turn_count())
        })
    });

    c.bench_function("classic game exact landing", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let config = EngineConfig::new(seed).exact_landing();
            let mut engine = MoveEngine::new(TransitionTable::classic(), config);
            engine.play_to_finish(10_000);
            black_box(engine.turn_count())
        })
    });
}

fn topology(c: &mut Criterion) {
    c.bench_function("square to cell", |b| {
        b.iter(|| {
            for square in Square::all() {
                black_box(square.cell());
            }
        })
    });
}

criterion_group!(benches, full_game, topology);
criterion_main!(benches);
