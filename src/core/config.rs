//! Game configuration.
//!
//! The board geometry and piece set are fixed by the rules; only the
//! scoring credit and the nominal game length (used to normalise the
//! progress feature of observations) are configurable.

use serde::{Deserialize, Serialize};

/// Starting credit per player: the total area of one side's pieces.
pub const DEFAULT_STARTING_CREDIT: i32 = 47;

/// 30 pieces in total plus headroom for captured pieces being replayed.
pub const DEFAULT_MAX_GAME_LENGTH: usize = 40;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use cathedral_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_max_game_length(60);
/// assert_eq!(config.starting_credit, 47);
/// assert_eq!(config.max_game_length, 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score each player starts from before placed area is subtracted.
    pub starting_credit: i32,

    /// Nominal maximum number of placements in a game.
    pub max_game_length: usize,
}

impl GameConfig {
    /// Create a configuration with the standard values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            starting_credit: DEFAULT_STARTING_CREDIT,
            max_game_length: DEFAULT_MAX_GAME_LENGTH,
        }
    }

    /// Set the starting credit.
    #[must_use]
    pub fn with_starting_credit(mut self, credit: i32) -> Self {
        self.starting_credit = credit;
        self
    }

    /// Set the nominal maximum game length.
    #[must_use]
    pub fn with_max_game_length(mut self, length: usize) -> Self {
        assert!(length > 0, "Game length must be positive");
        self.max_game_length = length;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_credit, 47);
        assert_eq!(config.max_game_length, 40);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_starting_credit(50)
            .with_max_game_length(64);

        assert_eq!(config.starting_credit, 50);
        assert_eq!(config.max_game_length, 64);
    }

    #[test]
    #[should_panic(expected = "Game length must be positive")]
    fn test_zero_length_rejected() {
        let _ = GameConfig::new().with_max_game_length(0);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_starting_credit(10);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
