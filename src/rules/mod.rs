//! Turn and territory engine.
//!
//! `GameState` owns the board, both inventories and the history. It
//! validates placements, runs the territory scan and passes the turn.
//! Scoring is a pure function over the history, and `SequentialGame`
//! exposes the state to external hosts.

pub mod engine;
pub mod score;
pub mod state;
pub mod territory;

pub use engine::{GameResult, SequentialGame};
pub use score::calc_scores;
pub use state::{GameSnapshot, GameState};
pub use territory::{candidate_regions, TERRITORY_MIN_MOVES};
