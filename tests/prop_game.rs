//! Property-based tests for the rule engine.
//!
//! Random playouts are driven by a seeded `ChaCha8Rng` so every failure
//! proptest reports can be replayed from its seed.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cathedral_engine::core::PlayerId;
use cathedral_engine::moves::{decode, encode, NUM_DISTINCT_ACTIONS};
use cathedral_engine::pieces::{BuildingType, PieceInventory};
use cathedral_engine::rules::GameState;
use cathedral_engine::EngineError;

/// Surviving pieces show their color and inventories balance with history.
fn check_consistency(state: &GameState) -> Result<(), TestCaseError> {
    for entry in state.history().iter().filter(|entry| !entry.removed) {
        for &sq in &entry.mv.form {
            prop_assert_eq!(state.board().get(sq), Some(entry.color()), "{} lost a cell", entry.mv);
        }
    }

    for player in PlayerId::all() {
        let seeded = PieceInventory::new(player);
        for building in BuildingType::ALL {
            let placed = state
                .history()
                .iter()
                .filter(|entry| entry.player == player && entry.mv.building == building)
                .filter(|entry| !entry.removed || building.is_opening())
                .count();
            prop_assert_eq!(
                state.inventory(player).count(building) as usize + placed,
                seeded.count(building) as usize
            );
        }
    }

    let scores = state.scores();
    prop_assert!(scores[PlayerId::WHITE] >= 0);
    prop_assert!(scores[PlayerId::BLACK] >= 0);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every code either round-trips or fails only on rotation.
    #[test]
    fn prop_codec_roundtrip(code in 0u32..NUM_DISTINCT_ACTIONS as u32) {
        match decode(code) {
            Ok(mv) => {
                prop_assert_eq!(mv.encode(), code);
                prop_assert_eq!(encode(mv.building, mv.rotation, mv.anchor), code);
            }
            Err(err) => {
                let is_rotation = matches!(err, EngineError::InvalidRotation { .. });
                prop_assert!(is_rotation, "unexpected error {:?}", err);
            }
        }
    }

    /// Random games keep board, inventories and scores consistent.
    #[test]
    fn prop_random_playout_consistent(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new();

        while !state.is_terminal() {
            let player = state.to_move();
            let moves = state.legal_moves();
            prop_assert!(!moves.is_empty());
            for mv in &moves {
                prop_assert!(state.is_legal(player, mv));
            }

            let mv = moves.choose(&mut rng).unwrap();
            state.apply_move(mv).unwrap();
            check_consistency(&state)?;
        }

        prop_assert!(state.legal_actions().is_empty());
    }

    /// Undoing the last move of a random line restores the previous state.
    #[test]
    fn prop_undo_replays_exactly(seed in any::<u64>(), length in 1usize..30) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new();
        let mut previous = state.snapshot();

        for _ in 0..length {
            if state.is_terminal() {
                break;
            }
            previous = state.snapshot();
            let action = *state.legal_actions().choose(&mut rng).unwrap();
            state.apply_action(action).unwrap();
        }

        prop_assert!(state.undo(previous.current_player).unwrap());
        prop_assert_eq!(state.snapshot(), previous);
    }

    /// Forked games never see each other's moves.
    #[test]
    fn prop_clones_are_independent(seed in any::<u64>(), length in 1usize..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new();
        let action = *state.legal_actions().choose(&mut rng).unwrap();
        state.apply_action(action).unwrap();

        let original = state.snapshot();
        let mut fork = state.clone();
        for _ in 0..length {
            if fork.is_terminal() {
                break;
            }
            let action = *fork.legal_actions().choose(&mut rng).unwrap();
            fork.apply_action(action).unwrap();
        }

        prop_assert_eq!(state.snapshot(), original);
    }
}
