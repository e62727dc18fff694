use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use xo_engine::{Board, Cell, PlacementRules, SessionRng, evaluate, select_move};

fn board_from(cells: [[Cell; 3]; 3]) -> Board {
    Board::from_rows(cells)
}

fn bench_evaluate(c: &mut Criterion) {
    use Cell::{Empty as E, Human as H, Opponent as O};

    let empty = Board::new();
    let drawn = board_from([[H, O, H], [H, O, O], [O, H, H]]);
    let anti_diagonal = board_from([[E, O, H], [O, H, E], [H, E, E]]);

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("empty", |b| b.iter(|| evaluate(black_box(&empty))));
    group.bench_function("drawn", |b| b.iter(|| evaluate(black_box(&drawn))));
    group.bench_function("anti_diagonal", |b| b.iter(|| evaluate(black_box(&anti_diagonal))));
    group.finish();
}

fn bench_select_move(c: &mut Criterion) {
    use Cell::{Empty as E, Human as H, Opponent as O};

    let mid_game = board_from([[H, E, O], [E, H, E], [O, E, E]]);
    let mut rng = SessionRng::from_random();

    c.bench_function("select_move_mid_game", |b| {
        b.iter(|| select_move(black_box(&mid_game), &mut rng, PlacementRules::Strict))
    });
}

criterion_group!(benches, bench_evaluate, bench_select_move);
criterion_main!(benches);
