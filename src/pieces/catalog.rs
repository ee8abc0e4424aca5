//! Piece geometry catalog.
//!
//! `PieceDefinition` holds the immutable geometry of one building kind:
//! its canonical shape, turn class, and for every legal rotation the
//! rotated shape and the orthogonally adjacent cells around it.
//!
//! `PieceCatalog` holds all fourteen definitions. It is built once per
//! process and shared by reference; nothing mutates it afterwards.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::sync::LazyLock;

use super::building::{BuildingType, Rotation, TurnClass, NUM_BUILDING_TYPES, NUM_ROTATIONS};
use crate::core::{EngineError, Result, Square};

/// Cells of a building's shape. No building covers more than six cells.
pub type Shape = SmallVec<[Square; 6]>;

/// Cells orthogonally adjacent to a shape.
pub type Adjacency = SmallVec<[Square; 16]>;

static CATALOG: LazyLock<PieceCatalog> = LazyLock::new(PieceCatalog::standard);

/// Static geometry of one building kind.
#[derive(Clone, Debug)]
pub struct PieceDefinition {
    /// Which building this describes.
    pub building: BuildingType,

    /// Copies each entitled player starts with.
    pub count: u8,

    /// Rotations the building may use.
    pub turn_class: TurnClass,

    /// Shape at rotation 0, relative to the anchor.
    pub canonical: Shape,

    /// Rotated shape per legal rotation, indexed by rotation.
    forms: SmallVec<[Shape; NUM_ROTATIONS]>,

    /// Adjacency cells per legal rotation, indexed by rotation.
    adjacency: SmallVec<[Adjacency; NUM_ROTATIONS]>,
}

impl PieceDefinition {
    /// Build a definition and precompute every legal rotation.
    #[must_use]
    pub fn new(building: BuildingType, count: u8, turn_class: TurnClass, canonical: &[Square]) -> Self {
        let forms: SmallVec<[Shape; NUM_ROTATIONS]> = turn_class
            .rotations()
            .map(|rotation| canonical.iter().map(|sq| sq.rotated(rotation.index())).collect())
            .collect();

        let adjacency = forms.iter().map(|form| adjacent_cells(form)).collect();

        Self {
            building,
            count,
            turn_class,
            canonical: Shape::from_slice(canonical),
            forms,
            adjacency,
        }
    }

    /// Number of cells the building covers.
    #[must_use]
    pub fn area(&self) -> usize {
        self.canonical.len()
    }

    /// Rotated shape, relative to the anchor.
    pub fn shape(&self, rotation: Rotation) -> Result<&[Square]> {
        self.forms
            .get(rotation.index())
            .map(|form| form.as_slice())
            .ok_or(EngineError::InvalidRotation {
                building: self.building,
                rotation,
            })
    }

    /// Adjacency cells of the rotated shape, relative to the anchor.
    pub fn adjacency(&self, rotation: Rotation) -> Result<&[Square]> {
        self.adjacency
            .get(rotation.index())
            .map(|cells| cells.as_slice())
            .ok_or(EngineError::InvalidRotation {
                building: self.building,
                rotation,
            })
    }
}

/// Orthogonal neighbours of every cell in `form`, minus the form itself,
/// sorted row-major.
fn adjacent_cells(form: &[Square]) -> Adjacency {
    let mut cells: FxHashSet<Square> = form.iter().flat_map(|sq| sq.orthogonal_neighbors()).collect();
    for sq in form {
        cells.remove(sq);
    }

    let mut sorted: Adjacency = cells.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Registry of all building definitions.
///
/// ## Example
///
/// ```
/// use cathedral_engine::pieces::{BuildingType, PieceCatalog, Rotation};
///
/// let catalog = PieceCatalog::global();
/// let stable = catalog.shape_for(BuildingType::Stable, Rotation::R90).unwrap();
/// assert_eq!(stable.len(), 2);
///
/// // Stables only turn a quarter.
/// assert!(catalog.shape_for(BuildingType::Stable, Rotation::R180).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    definitions: Vec<PieceDefinition>,
}

impl PieceCatalog {
    /// The process-wide catalog.
    #[must_use]
    pub fn global() -> &'static PieceCatalog {
        &CATALOG
    }

    /// Build the standard fourteen-building catalog.
    #[must_use]
    pub fn standard() -> Self {
        use TurnClass::{Fixed, Full, Half};

        let sq = |cells: &[(i32, i32)]| -> Vec<Square> {
            cells.iter().map(|&(x, y)| Square::new(x, y)).collect()
        };

        let definitions = vec![
            PieceDefinition::new(BuildingType::Tavern, 2, Fixed, &sq(&[(0, 0)])),
            PieceDefinition::new(BuildingType::Stable, 2, Half, &sq(&[(0, 0), (1, 0)])),
            PieceDefinition::new(BuildingType::Inn, 2, Full, &sq(&[(0, 0), (1, 0), (1, 1)])),
            PieceDefinition::new(BuildingType::Bridge, 1, Half, &sq(&[(0, 0), (0, -1), (0, 1)])),
            PieceDefinition::new(BuildingType::Manor, 1, Full, &sq(&[(-1, 0), (0, 0), (1, 0), (0, 1)])),
            PieceDefinition::new(BuildingType::Square, 1, Fixed, &sq(&[(0, 0), (0, 1), (1, 0), (1, 1)])),
            PieceDefinition::new(BuildingType::BlackAbbey, 1, Half, &sq(&[(-1, 0), (0, 0), (0, 1), (1, 1)])),
            PieceDefinition::new(BuildingType::WhiteAbbey, 1, Half, &sq(&[(-1, 1), (0, 0), (0, 1), (1, 0)])),
            PieceDefinition::new(BuildingType::BlackAcademy, 1, Full, &sq(&[(-1, 0), (0, -1), (0, 0), (0, 1), (1, -1)])),
            PieceDefinition::new(BuildingType::WhiteAcademy, 1, Full, &sq(&[(-1, -1), (0, -1), (0, 0), (0, 1), (1, 0)])),
            PieceDefinition::new(BuildingType::Infirmary, 1, Fixed, &sq(&[(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)])),
            PieceDefinition::new(BuildingType::Castle, 1, Full, &sq(&[(-1, 0), (-1, 1), (0, 0), (1, 0), (1, 1)])),
            PieceDefinition::new(BuildingType::Tower, 1, Full, &sq(&[(-1, -1), (0, -1), (0, 0), (1, 0), (1, 1)])),
            PieceDefinition::new(BuildingType::Cathedral, 1, Full, &sq(&[(-1, 0), (0, -1), (0, 0), (0, 1), (0, 2), (1, 0)])),
        ];

        debug_assert_eq!(definitions.len(), NUM_BUILDING_TYPES);
        debug_assert!(definitions.iter().enumerate().all(|(i, d)| d.building.index() == i));

        Self { definitions }
    }

    /// Definition of a building.
    #[must_use]
    pub fn get(&self, building: BuildingType) -> &PieceDefinition {
        &self.definitions[building.index()]
    }

    /// Rotated shape of a building, relative to its anchor.
    ///
    /// Fails with `InvalidRotation` beyond the building's turn class.
    pub fn shape_for(&self, building: BuildingType, rotation: Rotation) -> Result<&[Square]> {
        self.get(building).shape(rotation)
    }

    /// Adjacency cells of a rotated building, relative to its anchor.
    ///
    /// Fails with `InvalidRotation` beyond the building's turn class.
    pub fn adjacency_for(&self, building: BuildingType, rotation: Rotation) -> Result<&[Square]> {
        self.get(building).adjacency(rotation)
    }

    /// Iterate over all definitions in building index order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceDefinition> {
        self.definitions.iter()
    }
}
