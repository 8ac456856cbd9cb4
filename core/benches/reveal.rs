use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ndsweeper_core::*;

fn board(dimensions: &[Coord], seed: u64) -> Board {
    let total = total_squares(dimensions).expect("board size should fit");
    let config = BoardConfig::new(dimensions.to_vec())
        .with_mine_count(total / 10)
        .with_seed(seed);
    Board::new(config).expect("benchmark config should be valid")
}

fn first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");

    for (name, dimensions) in [
        ("2d_64x64", vec![64, 64]),
        ("2d_256x256", vec![256, 256]),
        ("3d_24x24x24", vec![24, 24, 24]),
        ("4d_10x10x10x10", vec![10, 10, 10, 10]),
    ] {
        let center: Coords = dimensions.iter().map(|size| size / 2).collect();
        group.bench_function(name, |b| {
            b.iter_batched(
                || board(&dimensions, 42),
                |mut board| black_box(board.reveal(&center)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn zero_mine_cascade(c: &mut Criterion) {
    c.bench_function("cascade_256x256_no_mines", |b| {
        b.iter_batched(
            || {
                let config = BoardConfig::new(vec![256, 256]).with_mine_count(0).with_seed(0);
                Board::new(config).expect("benchmark config should be valid")
            },
            |mut board| black_box(board.reveal(&[0, 0])),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, first_reveal, zero_mine_cascade);
criterion_main!(benches);
