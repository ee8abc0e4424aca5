//! Piece system: building kinds, geometry catalog, inventories.
//!
//! ## Key Types
//!
//! - `BuildingType`: The fourteen building kinds
//! - `Rotation` / `TurnClass`: Quarter turns and which of them a kind allows
//! - `PieceDefinition`: Precomputed shapes and adjacency per rotation
//! - `PieceCatalog`: Process-wide, read-only definition lookup
//! - `PieceInventory`: Remaining copies per player

pub mod building;
pub mod catalog;
pub mod inventory;

pub use building::{
    BuildingType, Rotation, TurnClass, BLACK_BUILDINGS, COMMON_BUILDINGS, NUM_BUILDING_TYPES, NUM_ROTATIONS,
    OPENING_BUILDING, OPENING_PLAYER, WHITE_BUILDINGS,
};
pub use catalog::{Adjacency, PieceCatalog, PieceDefinition, Shape};
pub use inventory::PieceInventory;
