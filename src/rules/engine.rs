//! Host-facing game interface.
//!
//! `SequentialGame` is the surface a generic two-player search or
//! training host drives: turn queries, integer actions, undo and
//! terminal utilities. `GameState` implements it by forwarding to its own
//! methods.

use crate::client::notation;
use crate::core::{PlayerId, PlayerMap, Result, NUM_PLAYERS};
use crate::moves::{ActionCode, NUM_DISTINCT_ACTIONS};

use super::state::GameState;

/// Result of a game by score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Compare two scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<i32>) -> Self {
        let (white, black) = (scores[PlayerId::WHITE], scores[PlayerId::BLACK]);
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::WHITE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::BLACK),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// +1 for the winner, -1 for the loser, 0 each for a draw.
    #[must_use]
    pub fn returns(&self) -> [f64; NUM_PLAYERS] {
        match self {
            GameResult::Winner(winner) => {
                let mut returns = [-1.0; NUM_PLAYERS];
                returns[winner.index()] = 1.0;
                returns
            }
            GameResult::Draw => [0.0; NUM_PLAYERS],
        }
    }
}

/// Sequential two-player game as seen by an external host.
///
/// ## Implementation Notes
///
/// - `player_to_move`: `None` once the game is over
/// - `legal_actions`: ascending, empty when the player to move is stuck
/// - `apply_action`: deterministic, rejects without mutating
/// - `undo_action`: the host names who moves next
pub trait SequentialGame {
    /// Player to move, `None` when terminal.
    fn player_to_move(&self) -> Option<PlayerId>;

    /// Legal action codes, ascending.
    fn legal_actions(&self) -> Vec<ActionCode>;

    /// Play an action for the player to move.
    fn apply_action(&mut self, action: ActionCode) -> Result<()>;

    /// Take back the last action and hand the turn to `player`.
    fn undo_action(&mut self, player: PlayerId, action: ActionCode) -> Result<()>;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Utility per player.
    fn returns(&self) -> [f64; NUM_PLAYERS];

    /// Size of the action space.
    fn num_distinct_actions(&self) -> usize {
        NUM_DISTINCT_ACTIONS
    }

    /// Upper bound on the number of placements.
    fn max_game_length(&self) -> usize;

    /// Human-readable action.
    fn action_to_string(&self, player: PlayerId, action: ActionCode) -> Result<String>;

    /// Raw board dump.
    fn observation_string(&self) -> String;

    /// Action codes of the whole game, space separated.
    fn history_string(&self) -> String;

    // === Convenience Methods ===

    /// Whether `action` is currently legal.
    fn is_legal_action(&self, action: ActionCode) -> bool {
        self.legal_actions().binary_search(&action).is_ok()
    }
}

impl SequentialGame for GameState {
    fn player_to_move(&self) -> Option<PlayerId> {
        (!self.is_terminal()).then(|| self.to_move())
    }

    fn legal_actions(&self) -> Vec<ActionCode> {
        GameState::legal_actions(self)
    }

    fn apply_action(&mut self, action: ActionCode) -> Result<()> {
        GameState::apply_action(self, action)
    }

    fn undo_action(&mut self, player: PlayerId, _action: ActionCode) -> Result<()> {
        self.undo(player).map(|_| ())
    }

    fn is_terminal(&self) -> bool {
        GameState::is_terminal(self)
    }

    fn returns(&self) -> [f64; NUM_PLAYERS] {
        GameState::returns(self)
    }

    fn max_game_length(&self) -> usize {
        self.config().max_game_length
    }

    fn action_to_string(&self, player: PlayerId, action: ActionCode) -> Result<String> {
        notation::format_action(player, action)
    }

    fn observation_string(&self) -> String {
        self.board().to_grid_string()
    }

    fn history_string(&self) -> String {
        self.history()
            .iter()
            .map(|entry| entry.mv.encode().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_from_scores() {
        let mut scores = PlayerMap::with_value(47);
        assert_eq!(GameResult::from_scores(&scores), GameResult::Draw);

        scores[PlayerId::WHITE] = 10;
        scores[PlayerId::BLACK] = 12;
        assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(PlayerId::BLACK));
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::BLACK);
        assert!(!result.is_winner(PlayerId::WHITE));
        assert!(result.is_winner(PlayerId::BLACK));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::WHITE));
    }

    #[test]
    fn test_game_result_returns() {
        assert_eq!(GameResult::Winner(PlayerId::WHITE).returns(), [1.0, -1.0]);
        assert_eq!(GameResult::Winner(PlayerId::BLACK).returns(), [-1.0, 1.0]);
        assert_eq!(GameResult::Draw.returns(), [0.0, 0.0]);
    }

    #[test]
    fn test_host_surface_on_new_game() {
        let state = GameState::new();

        assert_eq!(state.player_to_move(), Some(PlayerId::WHITE));
        assert_eq!(state.num_distinct_actions(), 5600);
        assert_eq!(state.max_game_length(), 40);
        assert_eq!(state.history_string(), "");
        assert!(state.observation_string().starts_with("0 0 0"));
    }
}
