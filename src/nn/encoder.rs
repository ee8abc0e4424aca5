//! Board observation tensors.
//!
//! Transforms a game into `[plane, y, x]` float planes for learning code.

use crate::board::CellState;
use crate::core::{PlayerId, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, NUM_PLAYERS};
use crate::moves::NUM_DISTINCT_ACTIONS;
use crate::nn::traits::EncodedState;
use crate::pieces::NUM_BUILDING_TYPES;
use crate::rules::GameState;

/// Plane holding `history length / max game length` everywhere.
pub const PROGRESS_PLANE: usize = NUM_BUILDING_TYPES;
/// Plane marking cells the perspective player may build on.
pub const FREE_SQUARES_PLANE: usize = NUM_BUILDING_TYPES + 1;
/// Plane that is all ones when the perspective player is Black.
pub const SIDE_PLANE: usize = NUM_BUILDING_TYPES + 2;
/// Total number of planes.
pub const NUM_PLANES: usize = NUM_BUILDING_TYPES + 3;

/// Encodes game state into tensors.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;

    /// Get the number of players this encoder supports.
    fn player_count(&self) -> usize;
}

/// Seventeen-plane board encoder.
///
/// - planes 0..14: one per building type. Cells of a surviving piece hold
///   `1 + 0.25 * rotation`, negated for the opponent's pieces
/// - plane 14: game progress
/// - plane 15: free squares for the perspective player
/// - plane 16: side indicator
#[derive(Clone, Copy, Debug, Default)]
pub struct ObservationEncoder;

impl ObservationEncoder {
    /// Create a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn offset(plane: usize, x: i32, y: i32) -> usize {
        plane * BOARD_SIZE + (y * BOARD_WIDTH + x) as usize
    }
}

impl StateEncoder for ObservationEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        for entry in state.history().iter().filter(|entry| !entry.removed) {
            let sign = if entry.player == perspective { 1.0 } else { -1.0 };
            let value = sign * (1.0 + 0.25 * entry.mv.rotation.index() as f32);
            let plane = entry.mv.building.index();
            for sq in entry.mv.form.iter().filter(|sq| sq.is_on_board()) {
                encoded.set(Self::offset(plane, sq.x, sq.y), value);
            }
        }

        let progress = state.move_count() as f32 / state.config().max_game_length as f32;
        if let Some(plane) = encoded.plane_mut(PROGRESS_PLANE) {
            plane.fill(progress);
        }

        let own = CellState::piece_color(perspective);
        let own_region = own.region_marker();
        for (y, row) in state.board().rows().iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == CellState::Empty || cell == own_region {
                    encoded.set(Self::offset(FREE_SQUARES_PLANE, x as i32, y as i32), 1.0);
                }
            }
        }

        if perspective == PlayerId::BLACK {
            if let Some(plane) = encoded.plane_mut(SIDE_PLANE) {
                plane.fill(1.0);
            }
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![NUM_PLANES, BOARD_HEIGHT as usize, BOARD_WIDTH as usize]
    }

    fn action_space_size(&self) -> usize {
        NUM_DISTINCT_ACTIONS
    }

    fn player_count(&self) -> usize {
        NUM_PLAYERS
    }
}
