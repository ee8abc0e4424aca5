//! Concrete placements.
//!
//! A `Move` is a building, a rotation and an anchor square, together with
//! the absolute squares it covers and the absolute cells around it. The
//! derived squares come straight from the catalog, so two moves compare
//! equal when building, rotation and anchor match.

use serde::{Deserialize, Serialize};

use super::codec::{self, ActionCode};
use crate::board::CellState;
use crate::core::{PlayerId, Result, Square};
use crate::pieces::{Adjacency, BuildingType, PieceCatalog, Rotation, Shape};

/// A placement of one building.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Move {
    /// Building being placed.
    pub building: BuildingType,

    /// Rotation of the building.
    pub rotation: Rotation,

    /// Square the building's relative origin lands on.
    pub anchor: Square,

    /// Absolute squares covered.
    pub form: Shape,

    /// Absolute squares orthogonally adjacent to `form`.
    pub adjacency: Adjacency,
}

impl Move {
    /// Build a move from the global catalog.
    ///
    /// Fails with `InvalidRotation` when the rotation exceeds the building's
    /// turn class.
    ///
    /// ```
    /// use cathedral_engine::core::Square;
    /// use cathedral_engine::moves::Move;
    /// use cathedral_engine::pieces::{BuildingType, Rotation};
    ///
    /// let mv = Move::new(Square::new(4, 4), BuildingType::Stable, Rotation::R90).unwrap();
    /// assert_eq!(mv.form.as_slice(), &[Square::new(4, 4), Square::new(4, 5)]);
    ///
    /// assert!(Move::new(Square::new(4, 4), BuildingType::Tavern, Rotation::R90).is_err());
    /// ```
    pub fn new(anchor: Square, building: BuildingType, rotation: Rotation) -> Result<Self> {
        Self::with_catalog(PieceCatalog::global(), anchor, building, rotation)
    }

    /// Build a move from a specific catalog.
    pub fn with_catalog(
        catalog: &PieceCatalog,
        anchor: Square,
        building: BuildingType,
        rotation: Rotation,
    ) -> Result<Self> {
        let definition = catalog.get(building);
        let form = definition.shape(rotation)?.iter().map(|&sq| sq + anchor).collect();
        let adjacency = definition
            .adjacency(rotation)?
            .iter()
            .map(|&sq| sq + anchor)
            .collect();

        Ok(Self {
            building,
            rotation,
            anchor,
            form,
            adjacency,
        })
    }

    /// Action code of this move.
    #[must_use]
    pub fn encode(&self) -> ActionCode {
        codec::encode(self.building, self.rotation, self.anchor)
    }

    /// Color this move paints when `player` makes it.
    #[must_use]
    pub fn color_for(&self, player: PlayerId) -> CellState {
        CellState::placing_color(self.building, player)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.building == other.building && self.rotation == other.rotation && self.anchor == other.anchor
    }
}

impl Eq for Move {}

impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.building.hash(state);
        self.rotation.hash(state);
        self.anchor.hash(state);
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{} rot {}", self.building, self.anchor, self.rotation)
    }
}

/// A placement in the game history.
///
/// Removed entries stay in the history so it can be replayed, but no
/// longer occupy the board or count for scoring and territory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Player who made the placement.
    pub player: PlayerId,

    /// The placement.
    pub mv: Move,

    /// Whether the piece was later captured.
    pub removed: bool,
}

impl HistoryEntry {
    /// Create a surviving entry.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move) -> Self {
        Self {
            player,
            mv,
            removed: false,
        }
    }

    /// Color the entry's piece occupies the board with.
    #[must_use]
    pub fn color(&self) -> CellState {
        self.mv.color_for(self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn test_move_translates_shape() {
        let mv = Move::new(Square::new(5, 5), BuildingType::Manor, Rotation::R0).unwrap();

        assert_eq!(
            mv.form.as_slice(),
            &[Square::new(4, 5), Square::new(5, 5), Square::new(6, 5), Square::new(5, 6)]
        );
        assert!(mv.adjacency.contains(&Square::new(5, 4)));
        assert!(!mv.adjacency.contains(&Square::new(5, 5)));
    }

    #[test]
    fn test_invalid_rotation() {
        let err = Move::new(Square::new(0, 0), BuildingType::Square, Rotation::R90).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidRotation {
                building: BuildingType::Square,
                rotation: Rotation::R90,
            }
        );
    }

    #[test]
    fn test_equality_ignores_derived_cells() {
        let a = Move::new(Square::new(2, 2), BuildingType::Inn, Rotation::R180).unwrap();
        let b = Move::new(Square::new(2, 2), BuildingType::Inn, Rotation::R180).unwrap();
        let c = Move::new(Square::new(2, 3), BuildingType::Inn, Rotation::R180).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_color_for() {
        let cathedral = Move::new(Square::new(4, 4), BuildingType::Cathedral, Rotation::R0).unwrap();
        let tavern = Move::new(Square::new(0, 0), BuildingType::Tavern, Rotation::R0).unwrap();

        assert_eq!(cathedral.color_for(PlayerId::WHITE), CellState::Blue);
        assert_eq!(tavern.color_for(PlayerId::BLACK), CellState::Black);
    }

    #[test]
    fn test_history_entry() {
        let tavern = Move::new(Square::new(0, 0), BuildingType::Tavern, Rotation::R0).unwrap();
        let entry = HistoryEntry::new(PlayerId::WHITE, tavern);

        assert!(!entry.removed);
        assert_eq!(entry.color(), CellState::White);
    }

    #[test]
    fn test_history_entry_serialization() {
        let inn = Move::new(Square::new(3, 3), BuildingType::Inn, Rotation::R90).unwrap();
        let entry = HistoryEntry::new(PlayerId::BLACK, inn);

        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
        assert_eq!(entry.mv.form, back.mv.form);
    }
}
