//! Criterion benchmark for move generation and make/unmake throughput,
//! measured via perft node counts at a fixed depth.

use chess_core::board::Board;
use chess_core::perft::perft;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let cases: &[(&str, &str, u32)] = &[
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 4),
        (
            "kiwipete",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            3,
        ),
    ];

    for (name, fen, depth) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), fen, |b, fen| {
            b.iter(|| {
                let mut board = Board::try_from_fen(fen).unwrap();
                perft(&mut board, *depth)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
