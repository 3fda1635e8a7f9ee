use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::Board;
use chess_rules::bot::RandomBot;
use chess_rules::game::GameState;
use chess_rules::movegen::legal_destinations;
use chess_rules::types::{Color, Square};

pub fn bench_legal_destinations_all_from_start(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal destinations for every square from start", |b| {
        b.iter(|| {
            for sq in Board::squares() {
                legal_destinations(black_box(&board), black_box(Color::White), sq);
            }
        })
    });
}

pub fn bench_legal_destinations_knight(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal destinations for b1 knight", |b| {
        b.iter(|| legal_destinations(black_box(&board), Color::White, Square::new(7, 1)))
    });
}

pub fn bench_classify_status_start(c: &mut Criterion) {
    let game = GameState::new();
    c.bench_function("classify status from start", |b| {
        b.iter(|| black_box(&game).classify_status())
    });
}

pub fn bench_random_game_40_plies(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat-sampling");
    group.sample_size(10);
    group.bench_function("seeded random game, 40 plies", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            let mut bot = RandomBot::new(Some(42));
            for _ in 0..40 {
                if game.is_over() || !bot.play_turn(&mut game).unwrap() {
                    break;
                }
            }
            game.history().len()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_destinations_all_from_start,
    bench_legal_destinations_knight,
    bench_classify_status_start,
    bench_random_game_40_plies,
);
criterion_main!(benches);
