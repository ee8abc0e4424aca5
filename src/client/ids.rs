//! Piece ids used by the external game client.
//!
//! The client numbers Black's pieces 1..=11 and White's 12..=23. Common
//! buildings share a slot and differ by 11 between the sides.

use crate::core::{EngineError, PlayerId, Result};
use crate::pieces::{BuildingType, COMMON_BUILDINGS, NUM_BUILDING_TYPES};

/// Offset between a common building's Black and White ids.
const WHITE_OFFSET: u8 = 11;

/// Id of every building as Black would place it. Exclusive ids are fixed.
const BASE_IDS: [u8; NUM_BUILDING_TYPES] = [1, 2, 3, 4, 5, 6, 7, 18, 11, 22, 8, 9, 10, 23];

/// Client id of `building` placed by `player`.
///
/// Exclusive buildings have one id regardless of `player`.
///
/// ```
/// use cathedral_engine::client::external_id;
/// use cathedral_engine::core::PlayerId;
/// use cathedral_engine::pieces::BuildingType;
///
/// assert_eq!(external_id(BuildingType::Tavern, PlayerId::BLACK), 1);
/// assert_eq!(external_id(BuildingType::Tavern, PlayerId::WHITE), 12);
/// assert_eq!(external_id(BuildingType::Cathedral, PlayerId::WHITE), 23);
/// ```
#[must_use]
pub fn external_id(building: BuildingType, player: PlayerId) -> u8 {
    let id = BASE_IDS[building.index()];
    if player == PlayerId::WHITE && COMMON_BUILDINGS.contains(&building) {
        id + WHITE_OFFSET
    } else {
        id
    }
}

/// Building and owner behind a client id.
pub fn from_external_id(id: u8) -> Result<(BuildingType, PlayerId)> {
    let player = if id > WHITE_OFFSET { PlayerId::WHITE } else { PlayerId::BLACK };

    BuildingType::ALL
        .iter()
        .copied()
        .find(|&building| external_id(building, player) == id)
        .map(|building| (building, player))
        .ok_or(EngineError::UnknownExternalId(id))
}
