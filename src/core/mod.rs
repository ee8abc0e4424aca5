//! Core engine types: coordinates, players, configuration, errors.
//!
//! These are the leaf types every other module builds on.

pub mod config;
pub mod error;
pub mod player;
pub mod square;

pub use config::{GameConfig, DEFAULT_MAX_GAME_LENGTH, DEFAULT_STARTING_CREDIT};
pub use error::{EngineError, Result};
pub use player::{PlayerId, PlayerMap, NUM_PLAYERS};
pub use square::{Square, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};
