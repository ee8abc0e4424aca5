//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::client::notation;
use crate::core::{GameConfig, PlayerId};
use crate::moves::ActionCode;
use crate::nn::{ObservationEncoder, StateEncoder};
use crate::rules::GameState;

use super::py_core::{to_py_err, PyPlayerId};

/// Python wrapper for a Cathedral game.
#[pyclass(name = "CathedralGame")]
pub struct PyCathedralGame {
    state: GameState,
}

#[pymethods]
impl PyCathedralGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - starting_credit: Score each player starts from
    /// - max_game_length: Length used to normalize the progress plane
    #[new]
    #[pyo3(signature = (starting_credit = 47, max_game_length = 40))]
    fn new(starting_credit: i32, max_game_length: usize) -> PyResult<Self> {
        if max_game_length == 0 {
            return Err(PyValueError::new_err("max_game_length must be positive"));
        }
        let config = GameConfig::new()
            .with_starting_credit(starting_credit)
            .with_max_game_length(max_game_length);
        Ok(Self {
            state: GameState::with_config(config),
        })
    }

    /// Legal action codes for the player to move, ascending.
    fn legal_actions(&self) -> Vec<ActionCode> {
        self.state.legal_actions()
    }

    /// Apply an action. Raises `ValueError` if it is not legal.
    fn apply_action(&mut self, action: ActionCode) -> PyResult<()> {
        self.state.apply_action(action).map_err(to_py_err)
    }

    /// Take back the last action and give the turn to `player`.
    ///
    /// Returns False when there was nothing to undo.
    fn undo_action(&mut self, player: &PyPlayerId) -> PyResult<bool> {
        self.state.undo(player.0).map_err(to_py_err)
    }

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Utility per player: [white, black].
    fn returns(&self) -> [f64; 2] {
        self.state.returns()
    }

    /// Current scores: [white, black].
    fn scores(&self) -> [i32; 2] {
        let scores = self.state.scores();
        [scores[PlayerId::WHITE], scores[PlayerId::BLACK]]
    }

    /// Player to move.
    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.state.to_move())
    }

    /// Number of placements made.
    #[getter]
    fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Observation planes `[17, 10, 10]` from `player`'s point of view.
    fn observation<'py>(&self, py: Python<'py>, player: &PyPlayerId) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let encoder = ObservationEncoder::new();
        let encoded = encoder.encode(&self.state, player.0);
        let shape = encoder.output_shape();
        PyArray1::from_vec_bound(py, encoded.tensor).reshape([shape[0], shape[1], shape[2]])
    }

    /// Client notation of an action.
    fn action_to_string(&self, player: &PyPlayerId, action: ActionCode) -> PyResult<String> {
        notation::format_action(player.0, action).map_err(to_py_err)
    }

    /// Raw board dump.
    fn board_string(&self) -> String {
        self.state.board().to_grid_string()
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_terminal() { "terminal" } else { "ongoing" };
        format!(
            "CathedralGame(moves={}, to_move={}, status={})",
            self.state.move_count(),
            self.state.to_move(),
            status
        )
    }
}
