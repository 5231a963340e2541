use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use skyscraper_checker::skyscrapers::board::{
    parse_line, reversed_interior, strip_border, Board, Cell, EXAMPLE_SEVEN,
};
use skyscraper_checker::skyscrapers::rules::{checks_uniqueness, checks_visibility, visible_count};
use skyscraper_checker::skyscrapers::validator::{inspect, validate};
use std::hint::black_box;

/// A compliant board with `n` buildings per line, every hint filled in.
fn latin_board(n: usize, rng: &mut fastrand::Rng) -> Board {
    let mut rows: Vec<usize> = (0..n).collect();
    let mut cols: Vec<usize> = (0..n).collect();
    rng.shuffle(&mut rows);
    rng.shuffle(&mut cols);

    let size = n + 2;
    let mut grid = vec![vec![Cell::Empty; size]; size];
    for (i, &r) in rows.iter().enumerate() {
        for (j, &c) in cols.iter().enumerate() {
            grid[i + 1][j + 1] = Cell::Height(u8::try_from((r + c) % n + 1).unwrap());
        }
    }

    let hint = |line: &[Cell]| Cell::Height(u8::try_from(visible_count(line)).unwrap());
    for i in 1..=n {
        let row = grid[i].clone();
        let col: Vec<Cell> = grid.iter().map(|r| r[i]).collect();
        grid[i][0] = hint(strip_border(&row));
        grid[i][size - 1] = hint(&reversed_interior(&row));
        grid[0][i] = hint(strip_border(&col));
        grid[size - 1][i] = hint(&reversed_interior(&col));
    }

    Board::new(grid).unwrap()
}

fn bench_rules(c: &mut Criterion) {
    let line = parse_line("12453").unwrap();
    let mut group = c.benchmark_group("rules");
    group.bench_function("visibility", |b| {
        b.iter(|| checks_visibility(black_box(&line), black_box(4)));
    });
    group.bench_function("uniqueness", |b| {
        b.iter(|| checks_uniqueness(black_box(&line)));
    });
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let example = Board::try_from(&EXAMPLE_SEVEN[..]).unwrap();
    let mut rng = fastrand::Rng::with_seed(7);

    let mut group = c.benchmark_group("validate");
    group.bench_function("example", |b| b.iter(|| validate(black_box(&example))));
    for n in [3, 5, 7, 9] {
        let board = latin_board(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| validate(black_box(board)));
        });
    }
    group.finish();
}

fn bench_inspect(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut group = c.benchmark_group("inspect");
    for n in [5, 9] {
        let board = latin_board(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| inspect(black_box(board)));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = EXAMPLE_SEVEN.join("\n");
    c.bench_function("parse_example", |b| {
        b.iter(|| black_box(&text).parse::<Board>().unwrap());
    });
}

criterion_group!(benches, bench_rules, bench_validate, bench_inspect, bench_parse);
criterion_main!(benches);
