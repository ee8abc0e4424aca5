//! Cell states.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::pieces::BuildingType;

/// Contents of one board cell.
///
/// Region states mark claimed territory. A region cell is not a piece; for
/// placement it behaves as empty for its owner's pieces only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty = 0,
    /// The neutral opening piece.
    Blue = 1,
    Black = 2,
    BlackRegion = 3,
    White = 4,
    WhiteRegion = 5,
}

impl CellState {
    /// Piece color of a player.
    #[must_use]
    pub const fn piece_color(player: PlayerId) -> Self {
        if player.0 == PlayerId::WHITE.0 {
            CellState::White
        } else {
            CellState::Black
        }
    }

    /// Color a building takes when `player` places it.
    ///
    /// The opening piece is neutral no matter who places it.
    #[must_use]
    pub const fn placing_color(building: BuildingType, player: PlayerId) -> Self {
        if building.is_opening() {
            CellState::Blue
        } else {
            Self::piece_color(player)
        }
    }

    /// Region marker belonging to a piece color. `Empty` for anything else.
    #[must_use]
    pub const fn region_marker(self) -> Self {
        match self {
            CellState::Black => CellState::BlackRegion,
            CellState::White => CellState::WhiteRegion,
            _ => CellState::Empty,
        }
    }

    /// Whether a piece of color `placing` may be put on this cell.
    #[must_use]
    pub fn accepts(self, placing: CellState) -> bool {
        match self {
            CellState::Empty => true,
            CellState::BlackRegion => placing == CellState::Black,
            CellState::WhiteRegion => placing == CellState::White,
            _ => false,
        }
    }

    /// Raw numeric value used in grid dumps.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placing_color() {
        assert_eq!(
            CellState::placing_color(BuildingType::Cathedral, PlayerId::WHITE),
            CellState::Blue
        );
        assert_eq!(
            CellState::placing_color(BuildingType::Inn, PlayerId::WHITE),
            CellState::White
        );
        assert_eq!(
            CellState::placing_color(BuildingType::Inn, PlayerId::BLACK),
            CellState::Black
        );
    }

    #[test]
    fn test_region_marker() {
        assert_eq!(CellState::Black.region_marker(), CellState::BlackRegion);
        assert_eq!(CellState::White.region_marker(), CellState::WhiteRegion);
        assert_eq!(CellState::Blue.region_marker(), CellState::Empty);
    }

    #[test]
    fn test_accepts() {
        assert!(CellState::Empty.accepts(CellState::Black));
        assert!(CellState::Empty.accepts(CellState::Blue));
        assert!(CellState::BlackRegion.accepts(CellState::Black));
        assert!(!CellState::BlackRegion.accepts(CellState::White));
        assert!(!CellState::WhiteRegion.accepts(CellState::Blue));
        assert!(!CellState::White.accepts(CellState::White));
        assert!(!CellState::Blue.accepts(CellState::Black));
    }

    #[test]
    fn test_raw_values() {
        let raw: Vec<u8> = [
            CellState::Empty,
            CellState::Blue,
            CellState::Black,
            CellState::BlackRegion,
            CellState::White,
            CellState::WhiteRegion,
        ]
        .iter()
        .map(|c| c.raw())
        .collect();
        assert_eq!(raw, vec![0, 1, 2, 3, 4, 5]);
    }
}
