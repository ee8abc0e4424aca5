//! Translation to and from the external game client.
//!
//! The client identifies pieces by its own numbering and exchanges moves
//! as short text lines. Nothing here touches game state.

pub mod ids;
pub mod notation;

pub use ids::{external_id, from_external_id};
pub use notation::{format_action, format_move, parse_move};
