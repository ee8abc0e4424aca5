//! Benchmarks for legal-move enumeration and complete random games.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cathedral_engine::rules::GameState;

/// A mid-game position reached by random play.
fn midgame(seed: u64, moves: usize) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::new();
    for _ in 0..moves {
        if state.is_terminal() {
            break;
        }
        let action = *state.legal_actions().choose(&mut rng).expect("non-terminal game has a move");
        state.apply_action(action).expect("legal action");
    }
    state
}

fn bench_legal_actions(c: &mut Criterion) {
    let opening = GameState::new();
    let midgame = midgame(42, 10);

    c.bench_function("legal_actions_opening", |b| {
        b.iter(|| black_box(black_box(&opening).legal_actions()));
    });

    c.bench_function("legal_actions_midgame", |b| {
        b.iter(|| black_box(black_box(&midgame).legal_actions()));
    });
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(midgame(black_box(seed), usize::MAX))
        });
    });
}

fn bench_undo(c: &mut Criterion) {
    let state = midgame(7, 20);
    let next = state.to_move();

    c.bench_function("undo_replay", |b| {
        b.iter(|| {
            let mut fork = black_box(&state).clone();
            black_box(fork.undo(next).expect("history replays"))
        });
    });
}

criterion_group!(benches, bench_legal_actions, bench_random_game, bench_undo);
criterion_main!(benches);
