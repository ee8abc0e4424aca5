//! # cathedral-engine
//!
//! Rule engine for Cathedral, a two-player territory game played with
//! polyomino buildings on a 10×10 board.
//!
//! ## Design Principles
//!
//! 1. **Static Geometry**: Every rotated shape and adjacency ring is
//!    computed once into a process-wide catalog and shared by reference.
//!
//! 2. **Errors As Values**: Contract violations and rejected moves come
//!    back as `EngineError`. A rejected move never mutates the game.
//!
//! 3. **Replay Undo**: Undo rebuilds the game from its history through the
//!    same placement path, so captures never have to be inverted by hand.
//!
//! ## Architecture
//!
//! - **Persistent History**: The move history is an `im::Vector`, so a
//!   cloned game is cheap and fully independent of its source.
//!
//! - **Territory Scan**: After qualifying placements, each side's open
//!   space is flood filled with 8-connectivity. Regions holding at most
//!   one foreign piece are claimed, and a lone foreign piece is captured.
//!
//! ## Modules
//!
//! - `core`: Squares, players, configuration, errors
//! - `pieces`: Building types, rotations, catalog, inventories
//! - `board`: Cell states and the grid
//! - `moves`: Placements, history entries, action codes
//! - `rules`: Game state, territory scan, scoring, host trait
//! - `nn`: Observation tensors
//! - `client`: External piece ids and move notation
//!
//! ## Example
//!
//! ```
//! use cathedral_engine::{GameState, SequentialGame};
//!
//! let mut game = GameState::new();
//! let opening = game.legal_actions()[0];
//! game.apply_action(opening).unwrap();
//!
//! assert_eq!(game.move_count(), 1);
//! assert!(!game.is_terminal());
//! assert_eq!(game.history_string(), opening.to_string());
//! ```

pub mod board;
pub mod client;
pub mod core;
pub mod moves;
pub mod nn;
pub mod pieces;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{EngineError, GameConfig, PlayerId, PlayerMap, Result, Square};

pub use crate::pieces::{BuildingType, PieceCatalog, PieceDefinition, PieceInventory, Rotation, TurnClass};

pub use crate::board::{BoardGrid, CellState};

pub use crate::moves::{ActionCode, HistoryEntry, Move, NUM_DISTINCT_ACTIONS};

pub use crate::rules::{GameResult, GameSnapshot, GameState, SequentialGame};

pub use crate::nn::{EncodedState, ObservationEncoder, StateEncoder};
