//! Action codes.
//!
//! `code = building_index × 400 + rotation_index × 100 + y × 10 + x`.
//! Every code below [`NUM_DISTINCT_ACTIONS`] decodes syntactically; codes
//! whose rotation exceeds the building's turn class fail move construction.

use super::placement::Move;
use crate::core::{EngineError, Result, Square, BOARD_SIZE, BOARD_WIDTH};
use crate::pieces::{BuildingType, Rotation, NUM_BUILDING_TYPES, NUM_ROTATIONS};

/// Integer identifier of a placement.
pub type ActionCode = u32;

const PER_ROTATION: ActionCode = BOARD_SIZE as ActionCode;
const PER_BUILDING: ActionCode = PER_ROTATION * NUM_ROTATIONS as ActionCode;

/// Size of the action space: 14 buildings × 4 rotations × 100 cells.
pub const NUM_DISTINCT_ACTIONS: usize = NUM_BUILDING_TYPES * NUM_ROTATIONS * BOARD_SIZE;

/// Encode a placement.
///
/// The anchor must be on the board.
///
/// ```
/// use cathedral_engine::core::Square;
/// use cathedral_engine::moves::encode;
/// use cathedral_engine::pieces::{BuildingType, Rotation};
///
/// assert_eq!(encode(BuildingType::Inn, Rotation::R90, Square::new(3, 7)), 2 * 400 + 100 + 73);
/// ```
#[must_use]
pub fn encode(building: BuildingType, rotation: Rotation, anchor: Square) -> ActionCode {
    debug_assert!(anchor.is_on_board(), "anchor {anchor} is off the board");

    building.index() as ActionCode * PER_BUILDING
        + rotation.index() as ActionCode * PER_ROTATION
        + (anchor.y * BOARD_WIDTH + anchor.x) as ActionCode
}

/// Split a code into its parts without building a move.
pub fn decode_parts(code: ActionCode) -> Result<(BuildingType, Rotation, Square)> {
    let building = BuildingType::from_index((code / PER_BUILDING) as usize).ok_or(EngineError::InvalidAction(code))?;
    let rotation =
        Rotation::from_index(((code % PER_BUILDING) / PER_ROTATION) as usize).ok_or(EngineError::InvalidAction(code))?;
    let cell = (code % PER_ROTATION) as usize;

    Ok((building, rotation, Square::from_cell_index(cell)))
}

/// Decode a code into a move.
///
/// Fails with `InvalidAction` beyond the action space and with
/// `InvalidRotation` when the rotation is not allowed for the building.
pub fn decode(code: ActionCode) -> Result<Move> {
    let (building, rotation, anchor) = decode_parts(code)?;
    Move::new(anchor, building, rotation)
}
