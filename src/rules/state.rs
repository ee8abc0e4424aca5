//! Game state: board, inventories, history and the turn machine.
//!
//! ## Turn flow
//!
//! 1. The proposed move is checked against the board and the mover's
//!    inventory. A rejected move leaves the state untouched.
//! 2. The piece is painted, its building consumed and the placement
//!    appended to the history.
//! 3. The territory trigger decides whether to run a territory scan
//!    (see `territory.rs`).
//! 4. The turn passes to the opponent if they can place anything;
//!    otherwise the mover keeps it. When neither side can place, the game
//!    is finished.
//!
//! ## Undo
//!
//! Undo drops the last history entry and replays the rest from an empty
//! board through the same placement path, so captures and claimed
//! territory are rebuilt rather than inverted.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::engine::GameResult;
use super::score;
use crate::board::{BoardGrid, CellState};
use crate::core::{EngineError, GameConfig, PlayerId, PlayerMap, Result, Square};
use crate::moves::{codec, ActionCode, HistoryEntry, Move};
use crate::pieces::{BuildingType, PieceCatalog, PieceInventory, Rotation, OPENING_BUILDING, OPENING_PLAYER};

/// Complete state of one game.
///
/// Cloning yields an independent game: the history is an `im::Vector`, so
/// clones share structure but never observe each other's mutations.
#[derive(Clone, Debug)]
pub struct GameState {
    catalog: &'static PieceCatalog,
    config: GameConfig,
    pub(crate) board: BoardGrid,
    pub(crate) inventories: PlayerMap<PieceInventory>,
    pub(crate) history: Vector<HistoryEntry>,
    current_player: PlayerId,
    finished: bool,
}

/// Read-only, serializable view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell grid.
    pub board: BoardGrid,
    /// Remaining pieces per player.
    pub inventories: PlayerMap<PieceInventory>,
    /// Every placement made, captured ones flagged as removed.
    pub history: Vec<HistoryEntry>,
    /// Player to move.
    pub current_player: PlayerId,
    /// Whether neither player can place anything.
    pub finished: bool,
    /// Current score per player.
    pub scores: PlayerMap<i32>,
}

impl GameState {
    /// Create a new game with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a new game with a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            catalog: PieceCatalog::global(),
            config,
            board: BoardGrid::new(),
            inventories: PlayerMap::new(PieceInventory::new),
            history: Vector::new(),
            current_player: OPENING_PLAYER,
            finished: false,
        }
    }

    // === Accessors ===

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Geometry catalog the game uses.
    #[must_use]
    pub fn catalog(&self) -> &'static PieceCatalog {
        self.catalog
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// A player's remaining pieces.
    #[must_use]
    pub fn inventory(&self, player: PlayerId) -> &PieceInventory {
        &self.inventories[player]
    }

    /// All placements so far, including captured ones.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// Number of placements made, including captured ones.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Player to move.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.current_player
    }

    /// Whether neither player can place anything.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.finished
    }

    /// History entries whose pieces were captured.
    pub fn removed_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().filter(|entry| entry.removed)
    }

    // === Legal moves ===

    /// Legal moves for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.current_player)
    }

    /// Legal moves for `player`.
    ///
    /// Empty unless `player` is the one to move. Before the first
    /// placement only the opening building is offered.
    #[must_use]
    pub fn legal_moves_for(&self, player: PlayerId) -> Vec<Move> {
        if player != self.current_player || self.finished {
            return Vec::new();
        }

        if self.history.is_empty() {
            return if player == OPENING_PLAYER {
                self.moves_for_building(OPENING_BUILDING, player)
            } else {
                Vec::new()
            };
        }

        self.inventories[player]
            .available_types()
            .flat_map(|building| self.moves_for_building(building, player))
            .collect()
    }

    /// Legal action codes for the player to move, ascending.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionCode> {
        let mut actions: Vec<ActionCode> = self.legal_moves().iter().map(Move::encode).collect();
        actions.sort_unstable();
        actions
    }

    /// Every board placement of `building` open to `player`, ignoring
    /// whose turn it is.
    #[must_use]
    pub fn moves_for_building(&self, building: BuildingType, player: PlayerId) -> Vec<Move> {
        if !self.inventories[player].available(building) {
            return Vec::new();
        }

        let color = CellState::placing_color(building, player);
        let shapes = self.rotated_shapes(building);

        let mut moves = Vec::new();
        for anchor in Square::all() {
            for &(rotation, shape) in &shapes {
                if self.board.fits(shape.iter().map(|&sq| sq + anchor), color) {
                    if let Ok(mv) = Move::with_catalog(self.catalog, anchor, building, rotation) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// Whether `player` could place any available building anywhere.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId) -> bool {
        self.inventories[player].available_types().any(|building| {
            let color = CellState::placing_color(building, player);
            let shapes = self.rotated_shapes(building);
            Square::all().any(|anchor| {
                shapes
                    .iter()
                    .any(|&(_, shape)| self.board.fits(shape.iter().map(|&sq| sq + anchor), color))
            })
        })
    }

    fn rotated_shapes(&self, building: BuildingType) -> SmallVec<[(Rotation, &'static [Square]); 4]> {
        let definition = self.catalog.get(building);
        definition
            .turn_class
            .rotations()
            .filter_map(|rotation| definition.shape(rotation).ok().map(|shape| (rotation, shape)))
            .collect()
    }

    /// Whether `player` may make `mv` right now.
    #[must_use]
    pub fn is_legal(&self, player: PlayerId, mv: &Move) -> bool {
        if self.finished || player != self.current_player {
            return false;
        }
        if self.history.is_empty() && (mv.building != OPENING_BUILDING || player != OPENING_PLAYER) {
            return false;
        }
        self.inventories[player].available(mv.building) && self.board.is_legal(mv, mv.color_for(player))
    }

    // === Playing ===

    /// Place `mv` for the player to move.
    ///
    /// An illegal move returns `IllegalPlacement` and changes nothing.
    #[instrument(skip(self, mv), fields(player = %self.current_player, action = mv.encode()))]
    pub fn apply_move(&mut self, mv: &Move) -> Result<()> {
        let player = self.current_player;
        if !self.is_legal(player, mv) {
            return Err(EngineError::IllegalPlacement {
                building: mv.building,
                anchor: mv.anchor,
            });
        }
        self.commit(player, mv.clone())
    }

    /// Decode and place an action code for the player to move.
    pub fn apply_action(&mut self, action: ActionCode) -> Result<()> {
        let mv = codec::decode(action)?;
        self.apply_move(&mv)
    }

    /// Place without legality checks, then resolve territory and the turn.
    fn commit(&mut self, player: PlayerId, mv: Move) -> Result<()> {
        self.inventories[player].consume(mv.building)?;

        let color = mv.color_for(player);
        self.board.apply(&mv.form, color);
        debug!(%player, action = mv.encode(), building = ?mv.building, "placed building");

        self.history.push_back(HistoryEntry::new(player, mv));

        if self.territory_triggered() {
            self.run_territory_scan();
        }

        self.advance_turn(player);
        Ok(())
    }

    fn advance_turn(&mut self, mover: PlayerId) {
        let next = mover.opponent();
        if self.has_legal_move(next) {
            self.current_player = next;
            return;
        }

        self.current_player = mover;
        if !self.has_legal_move(mover) {
            self.finished = true;
            let scores = self.scores();
            info!(
                white = scores[PlayerId::WHITE],
                black = scores[PlayerId::BLACK],
                moves = self.history.len(),
                "game finished"
            );
        }
    }

    /// Take back the last placement and hand the turn to `next_player`.
    ///
    /// Board, inventories and capture flags are rebuilt by replaying the
    /// remaining history. Returns `Ok(false)` when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self, next_player: PlayerId) -> Result<bool> {
        if PlayerId::try_new(next_player.0).is_none() {
            return Err(EngineError::InvalidPlayer(next_player.0));
        }
        if self.history.pop_back().is_none() {
            return Ok(false);
        }

        let replay = std::mem::take(&mut self.history);
        self.board = BoardGrid::new();
        for (_, inventory) in self.inventories.iter_mut() {
            inventory.reset();
        }
        self.finished = false;

        for entry in replay {
            self.current_player = entry.player;
            if let Err(err) = self.commit(entry.player, entry.mv) {
                warn!(%err, "history replay failed");
                return Err(err);
            }
        }

        self.current_player = next_player;
        Ok(true)
    }

    // === Scoring ===

    /// Score per player: starting credit minus surviving placed area.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        score::calc_scores(&self.history, self.config.starting_credit)
    }

    /// Outcome by current scores, whether or not the game is over.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_scores(&self.scores())
    }

    /// Outcome once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.finished.then(|| self.result())
    }

    /// Utility per player: ±1 for a finished game with a winner, else 0.
    #[must_use]
    pub fn returns(&self) -> [f64; 2] {
        self.outcome().map_or([0.0, 0.0], |result| result.returns())
    }

    // === Views ===

    /// Serializable view of everything external layers may read.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            inventories: self.inventories.clone(),
            history: self.history.iter().cloned().collect(),
            current_player: self.current_player,
            finished: self.finished,
            scores: self.scores(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
