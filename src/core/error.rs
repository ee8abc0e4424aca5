//! Engine error type.
//!
//! Every failure is scoped to the call that produced it; nothing here is
//! fatal to a game in progress.

use thiserror::Error;

use super::square::Square;
use crate::moves::ActionCode;
use crate::pieces::{BuildingType, Rotation};

/// Errors returned by engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The rotation exceeds what the building's turn class allows.
    #[error("{building:?} cannot be placed with rotation {rotation}")]
    InvalidRotation {
        /// Building being rotated.
        building: BuildingType,
        /// Requested rotation.
        rotation: Rotation,
    },

    /// The player has no copies of this building left.
    #[error("no {0:?} left in inventory")]
    BuildingUnavailable(BuildingType),

    /// The placement is not legal in the current position.
    #[error("illegal placement of {building:?} at {anchor}")]
    IllegalPlacement {
        /// Building being placed.
        building: BuildingType,
        /// Anchor square of the placement.
        anchor: Square,
    },

    /// The action code is outside the encodable range.
    #[error("action code {0} is out of range")]
    InvalidAction(ActionCode),

    /// The player id is neither White nor Black.
    #[error("invalid player id {0}")]
    InvalidPlayer(u8),

    /// The external client piece id is not in the mapping table.
    #[error("unknown external building id {0}")]
    UnknownExternalId(u8),

    /// A textual move could not be parsed.
    #[error("malformed move notation: {0:?}")]
    MalformedNotation(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
