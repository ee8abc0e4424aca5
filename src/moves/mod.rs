//! Moves: placements, history entries and the action codec.
//!
//! Moves are built from catalog data and are cheap to compare: equality
//! and hashing use only building, rotation and anchor.

pub mod codec;
pub mod placement;

pub use codec::{decode, decode_parts, encode, ActionCode, NUM_DISTINCT_ACTIONS};
pub use placement::{HistoryEntry, Move};
