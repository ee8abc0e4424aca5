//! Per-player remaining-piece counters.

use serde::{Deserialize, Serialize};

use super::building::{BuildingType, COMMON_BUILDINGS, NUM_BUILDING_TYPES};
use super::catalog::PieceCatalog;
use crate::core::{EngineError, PlayerId, Result};

/// Remaining copies of each building for one player.
///
/// Seeded from the common set plus the owner's exclusive set. Counts never
/// go negative and never exceed the seeded amount.
///
/// ## Example
///
/// ```
/// use cathedral_engine::core::PlayerId;
/// use cathedral_engine::pieces::{BuildingType, PieceInventory};
///
/// let mut inventory = PieceInventory::new(PlayerId::BLACK);
/// assert_eq!(inventory.count(BuildingType::Tavern), 2);
///
/// inventory.consume(BuildingType::Tavern).unwrap();
/// inventory.refund(BuildingType::Tavern);
/// assert_eq!(inventory.count(BuildingType::Tavern), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceInventory {
    owner: PlayerId,
    counts: [u8; NUM_BUILDING_TYPES],
}

impl PieceInventory {
    /// Create the starting inventory for `owner`.
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            counts: Self::seed(owner),
        }
    }

    fn seed(owner: PlayerId) -> [u8; NUM_BUILDING_TYPES] {
        let catalog = PieceCatalog::global();
        let mut counts = [0u8; NUM_BUILDING_TYPES];

        for &building in COMMON_BUILDINGS.iter().chain(BuildingType::exclusive_to(owner)) {
            counts[building.index()] += catalog.get(building).count;
        }

        counts
    }

    /// Restore the starting inventory.
    pub fn reset(&mut self) {
        self.counts = Self::seed(self.owner);
    }

    /// Player this inventory belongs to.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Remaining copies of a building.
    #[must_use]
    pub fn count(&self, building: BuildingType) -> u8 {
        self.counts[building.index()]
    }

    /// Whether at least one copy remains.
    #[must_use]
    pub fn available(&self, building: BuildingType) -> bool {
        self.count(building) > 0
    }

    /// Take one copy. Fails with `BuildingUnavailable` at zero.
    pub fn consume(&mut self, building: BuildingType) -> Result<()> {
        let count = &mut self.counts[building.index()];
        if *count == 0 {
            return Err(EngineError::BuildingUnavailable(building));
        }
        *count -= 1;
        Ok(())
    }

    /// Return one copy of a captured building.
    ///
    /// The opening piece is never returned.
    pub fn refund(&mut self, building: BuildingType) {
        if !building.is_opening() {
            self.counts[building.index()] += 1;
        }
    }

    /// Buildings with at least one copy left, in index order.
    pub fn available_types(&self) -> impl Iterator<Item = BuildingType> + '_ {
        BuildingType::ALL
            .into_iter()
            .filter(move |&building| self.available(building))
    }

    /// Total pieces left.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_seeding() {
        let inventory = PieceInventory::new(PlayerId::WHITE);

        assert_eq!(inventory.count(BuildingType::Tavern), 2);
        assert_eq!(inventory.count(BuildingType::Stable), 2);
        assert_eq!(inventory.count(BuildingType::Inn), 2);
        assert_eq!(inventory.count(BuildingType::Cathedral), 1);
        assert_eq!(inventory.count(BuildingType::WhiteAbbey), 1);
        assert_eq!(inventory.count(BuildingType::BlackAbbey), 0);
        assert_eq!(inventory.total(), 15);
    }

    #[test]
    fn test_black_seeding() {
        let inventory = PieceInventory::new(PlayerId::BLACK);

        assert_eq!(inventory.count(BuildingType::Cathedral), 0);
        assert_eq!(inventory.count(BuildingType::BlackAcademy), 1);
        assert_eq!(inventory.count(BuildingType::WhiteAcademy), 0);
        assert_eq!(inventory.total(), 14);
    }

    #[test]
    fn test_consume_until_empty() {
        let mut inventory = PieceInventory::new(PlayerId::BLACK);

        assert!(inventory.consume(BuildingType::Tavern).is_ok());
        assert!(inventory.consume(BuildingType::Tavern).is_ok());
        assert!(!inventory.available(BuildingType::Tavern));
        assert_eq!(
            inventory.consume(BuildingType::Tavern),
            Err(EngineError::BuildingUnavailable(BuildingType::Tavern))
        );
        assert_eq!(inventory.count(BuildingType::Tavern), 0);
    }

    #[test]
    fn test_consume_unowned_building() {
        let mut inventory = PieceInventory::new(PlayerId::BLACK);
        assert!(inventory.consume(BuildingType::Cathedral).is_err());
    }

    #[test]
    fn test_refund_skips_opening_piece() {
        let mut inventory = PieceInventory::new(PlayerId::WHITE);

        inventory.consume(BuildingType::Cathedral).unwrap();
        inventory.refund(BuildingType::Cathedral);

        assert!(!inventory.available(BuildingType::Cathedral));
    }

    #[test]
    fn test_available_types() {
        let mut inventory = PieceInventory::new(PlayerId::BLACK);
        inventory.consume(BuildingType::Bridge).unwrap();

        let types: Vec<_> = inventory.available_types().collect();
        assert_eq!(types.len(), 10);
        assert!(!types.contains(&BuildingType::Bridge));
        assert!(types.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reset() {
        let mut inventory = PieceInventory::new(PlayerId::WHITE);
        inventory.consume(BuildingType::Castle).unwrap();
        inventory.consume(BuildingType::Cathedral).unwrap();

        inventory.reset();

        assert_eq!(inventory, PieceInventory::new(PlayerId::WHITE));
    }
}
