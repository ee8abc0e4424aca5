//! Board system: cell states and the 10×10 grid.
//!
//! The grid is the only mutable geometry in a game. It changes through
//! three paths: placing a piece, clearing a captured piece, and painting
//! claimed territory.

pub mod cell;
pub mod grid;

pub use cell::CellState;
pub use grid::BoardGrid;
