//! Territory detection and capture.
//!
//! After a placement that touches the edge or the mover's own pieces on
//! at least two sides, every region not colored by a player is flood
//! filled with 8-connectivity. A region holding at most one surviving
//! foreign piece becomes that player's territory; a lone foreign piece
//! inside it is captured.

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::state::GameState;
use crate::board::{BoardGrid, CellState};
use crate::core::{Square, BOARD_SIZE};

/// History length from which placements can trigger a scan.
pub const TERRITORY_MIN_MOVES: usize = 3;

/// Adjacency cells needed to trigger a scan.
const TRIGGER_THRESHOLD: usize = 2;

/// Colors scanned, in order.
const CLAIMANTS: [CellState; 2] = [CellState::Black, CellState::White];

const MOORE: [(i32, i32); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

/// Maximal 8-connected groups of cells neither colored `claimant` nor
/// claimed by it, in row-major discovery order.
#[must_use]
pub fn candidate_regions(board: &BoardGrid, claimant: CellState) -> Vec<Vec<Square>> {
    let own_region = claimant.region_marker();
    let mut open = [false; BOARD_SIZE];
    for sq in Square::all() {
        if let (Some(cell), Some(idx)) = (board.get(sq), sq.cell_index()) {
            open[idx] = cell != claimant && cell != own_region;
        }
    }

    let mut seen = [false; BOARD_SIZE];
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..BOARD_SIZE {
        if !open[start] || seen[start] {
            continue;
        }

        seen[start] = true;
        queue.push_back(Square::from_cell_index(start));
        let mut region = Vec::new();

        while let Some(sq) = queue.pop_front() {
            region.push(sq);
            for (dx, dy) in MOORE {
                let Some(idx) = Square::new(sq.x + dx, sq.y + dy).cell_index() else {
                    continue;
                };
                if open[idx] && !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(Square::from_cell_index(idx));
                }
            }
        }

        regions.push(region);
    }

    regions
}

impl GameState {
    /// Cheap test on the last placement deciding whether to scan.
    pub(crate) fn territory_triggered(&self) -> bool {
        let played = self.history.len();
        if played < TERRITORY_MIN_MOVES {
            return false;
        }
        let Some(last) = self.history.back() else {
            return false;
        };

        let color = last.color();
        let forced = played == TERRITORY_MIN_MOVES;
        let closing = last
            .mv
            .adjacency
            .iter()
            .filter(|&&sq| forced || self.board.get(sq).map_or(true, |cell| cell == color))
            .count();

        trace!(played, closing, "territory trigger");
        closing >= TRIGGER_THRESHOLD
    }

    /// Claim every region enclosed by one color and capture lone pieces
    /// inside them.
    ///
    /// Running it again without an intervening placement changes nothing.
    pub fn run_territory_scan(&mut self) {
        for claimant in CLAIMANTS {
            for region in candidate_regions(&self.board, claimant) {
                self.resolve_candidate(&region, claimant);
            }
        }
    }

    fn resolve_candidate(&mut self, region: &[Square], claimant: CellState) {
        let mut inside = [false; BOARD_SIZE];
        for idx in region.iter().filter_map(|sq| sq.cell_index()) {
            inside[idx] = true;
        }

        let foreign: SmallVec<[usize; 2]> = self
            .history
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                !entry.removed
                    && entry.color() != claimant
                    && entry.mv.anchor.cell_index().is_some_and(|idx| inside[idx])
            })
            .map(|(idx, _)| idx)
            .take(2)
            .collect();

        match foreign.as_slice() {
            [] => self.claim(region, claimant),
            &[victim] => {
                self.capture(victim);
                self.claim(region, claimant);
            }
            _ => {}
        }
    }

    fn capture(&mut self, index: usize) {
        let Some(entry) = self.history.get_mut(index) else {
            return;
        };
        entry.removed = true;
        let (player, building, anchor) = (entry.player, entry.mv.building, entry.mv.anchor);
        let form = entry.mv.form.clone();

        self.board.clear(&form);
        self.inventories[player].refund(building);
        debug!(%player, ?building, %anchor, "captured building");
    }

    fn claim(&mut self, region: &[Square], claimant: CellState) {
        self.board.apply(region, claimant.region_marker());
        debug!(?claimant, cells = region.len(), "claimed territory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::pieces::{BuildingType, Rotation};

    #[test]
    fn test_empty_board_is_one_region() {
        let board = BoardGrid::new();
        let regions = candidate_regions(&board, CellState::Black);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 100);
    }

    #[test]
    fn test_diagonal_wall_leaks() {
        let mut board = BoardGrid::new();
        board.apply(
            &[Square::new(2, 0), Square::new(1, 1), Square::new(0, 2)],
            CellState::White,
        );

        // (1, 0) touches (2, 1) diagonally.
        let regions = candidate_regions(&board, CellState::White);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 97);
    }

    #[test]
    fn test_corner_pocket() {
        let mut board = BoardGrid::new();
        board.apply(
            &[Square::new(1, 0), Square::new(1, 1), Square::new(0, 1)],
            CellState::Black,
        );

        let regions = candidate_regions(&board, CellState::Black);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], vec![Square::new(0, 0)]);
        assert_eq!(regions[1].len(), 96);
    }

    fn play(state: &mut GameState, building: BuildingType, x: i32, y: i32) {
        let mv = Move::new(Square::new(x, y), building, Rotation::R0).unwrap();
        state.apply_move(&mv).unwrap();
    }

    #[test]
    fn test_trigger_forced_on_third_move() {
        let mut state = GameState::new();
        play(&mut state, BuildingType::Cathedral, 5, 5);
        play(&mut state, BuildingType::Tavern, 2, 2);
        assert!(!state.territory_triggered());

        // Third placement is forced even in open space.
        play(&mut state, BuildingType::Tavern, 7, 2);
        assert!(state.territory_triggered());

        play(&mut state, BuildingType::Tavern, 2, 7);
        assert!(!state.territory_triggered());

        // Corner: two neighbours are off the board.
        play(&mut state, BuildingType::Tavern, 9, 9);
        assert!(state.territory_triggered());
    }

    #[test]
    fn test_trigger_ignores_single_edge() {
        let mut state = GameState::new();
        play(&mut state, BuildingType::Cathedral, 5, 5);
        play(&mut state, BuildingType::Tavern, 2, 2);
        play(&mut state, BuildingType::Tavern, 7, 2);

        // One side off the board, the rest empty.
        play(&mut state, BuildingType::Tavern, 0, 7);
        assert!(!state.territory_triggered());

        // One off-board side plus White's own tavern at (7, 2) is two.
        play(&mut state, BuildingType::Stable, 8, 2);
        assert!(state.territory_triggered());
    }

    #[test]
    fn test_own_region_excluded() {
        let mut board = BoardGrid::new();
        board.apply(&[Square::new(0, 0)], CellState::BlackRegion);

        let black = candidate_regions(&board, CellState::Black);
        assert_eq!(black.iter().map(Vec::len).sum::<usize>(), 99);

        let white = candidate_regions(&board, CellState::White);
        assert_eq!(white.iter().map(Vec::len).sum::<usize>(), 100);
    }
}
