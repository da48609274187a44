use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mystic_chess::engines::computer_player::{engine_for, Difficulty};
use mystic_chess::game_state::chess_types::Color;
use mystic_chess::move_generation::legal_move_apply::apply_move;
use mystic_chess::utils::fen::parse_fen;

const POSITIONS: &[(&str, &str)] = &[
    (
        "opening",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "middlegame",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
];

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, fen) in POSITIONS {
        let game = parse_fen(fen).expect("benchmark FEN should parse");

        for difficulty in Difficulty::ALL {
            let mut engine = engine_for(difficulty, Some(1));

            // Correctness guard before benchmarking.
            let out = engine
                .choose_move(&game, Color::White)
                .expect("engine should run");
            let chosen = out.best_move.expect("white should have a move");
            apply_move(&game, chosen.from, chosen.to).expect("chosen move should be legal");

            group.bench_with_input(
                BenchmarkId::new(difficulty.as_str(), name),
                &game,
                |b, game| {
                    b.iter(|| {
                        let out = engine
                            .choose_move(black_box(game), Color::White)
                            .expect("engine benchmark run should succeed");
                        black_box(out.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(engine_benches, bench_engines);
criterion_main!(engine_benches);
