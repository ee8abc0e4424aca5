//! Building kinds, rotations and turn classes.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Number of distinct building kinds.
pub const NUM_BUILDING_TYPES: usize = 14;

/// Number of quarter-turn rotations.
pub const NUM_ROTATIONS: usize = 4;

/// The fourteen building kinds.
///
/// Discriminants are the building index used by the action codec and the
/// observation planes, so the order is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Tavern = 0,
    Stable = 1,
    Inn = 2,
    Bridge = 3,
    Manor = 4,
    Square = 5,
    BlackAbbey = 6,
    WhiteAbbey = 7,
    BlackAcademy = 8,
    WhiteAcademy = 9,
    Infirmary = 10,
    Castle = 11,
    Tower = 12,
    Cathedral = 13,
}

/// Buildings both players receive.
pub const COMMON_BUILDINGS: [BuildingType; 9] = [
    BuildingType::Tavern,
    BuildingType::Stable,
    BuildingType::Inn,
    BuildingType::Bridge,
    BuildingType::Manor,
    BuildingType::Square,
    BuildingType::Infirmary,
    BuildingType::Castle,
    BuildingType::Tower,
];

/// Buildings only White receives. The first entry is the opening piece.
pub const WHITE_BUILDINGS: [BuildingType; 3] = [
    BuildingType::Cathedral,
    BuildingType::WhiteAbbey,
    BuildingType::WhiteAcademy,
];

/// Buildings only Black receives.
pub const BLACK_BUILDINGS: [BuildingType; 2] = [BuildingType::BlackAbbey, BuildingType::BlackAcademy];

/// The building every game opens with.
pub const OPENING_BUILDING: BuildingType = BuildingType::Cathedral;

/// The player who places the opening building.
pub const OPENING_PLAYER: PlayerId = PlayerId::WHITE;

impl BuildingType {
    /// All kinds in index order.
    pub const ALL: [BuildingType; NUM_BUILDING_TYPES] = [
        BuildingType::Tavern,
        BuildingType::Stable,
        BuildingType::Inn,
        BuildingType::Bridge,
        BuildingType::Manor,
        BuildingType::Square,
        BuildingType::BlackAbbey,
        BuildingType::WhiteAbbey,
        BuildingType::BlackAcademy,
        BuildingType::WhiteAcademy,
        BuildingType::Infirmary,
        BuildingType::Castle,
        BuildingType::Tower,
        BuildingType::Cathedral,
    ];

    /// Index of this kind (0..14).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind for an index, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the neutral opening piece.
    #[must_use]
    pub const fn is_opening(self) -> bool {
        matches!(self, BuildingType::Cathedral)
    }

    /// Buildings exclusive to `player`.
    #[must_use]
    pub fn exclusive_to(player: PlayerId) -> &'static [BuildingType] {
        if player == PlayerId::WHITE {
            &WHITE_BUILDINGS
        } else {
            &BLACK_BUILDINGS
        }
    }
}

/// A quarter-turn rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0 = 0,
    R90 = 1,
    R180 = 2,
    R270 = 3,
}

impl Rotation {
    /// All rotations in index order.
    pub const ALL: [Rotation; NUM_ROTATIONS] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Rotation index (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an index, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        self as i32 * 90
    }

    /// Rotation for an angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub fn from_degrees(angle: i32) -> Option<Self> {
        if angle % 90 != 0 || angle < 0 {
            return None;
        }
        Self::from_index((angle / 90) as usize)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Which rotations a building may legally use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnClass {
    /// Rotation 0 only.
    Fixed,
    /// Rotations 0 and 90.
    Half,
    /// All four rotations.
    Full,
}

impl TurnClass {
    /// Highest legal rotation.
    #[must_use]
    pub const fn max_rotation(self) -> Rotation {
        match self {
            TurnClass::Fixed => Rotation::R0,
            TurnClass::Half => Rotation::R90,
            TurnClass::Full => Rotation::R270,
        }
    }

    /// Whether `rotation` is within this class's bound.
    #[must_use]
    pub fn allows(self, rotation: Rotation) -> bool {
        rotation <= self.max_rotation()
    }

    /// Legal rotations in ascending order.
    pub fn rotations(self) -> impl Iterator<Item = Rotation> {
        Rotation::ALL.into_iter().take(self.max_rotation().index() + 1)
    }
}
