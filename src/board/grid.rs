//! The 10×10 board.
//!
//! The grid only knows cell colors. Which history entry owns a cell is
//! tracked by the game state, not here.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::cell::CellState;
use crate::core::{Square, BOARD_HEIGHT, BOARD_WIDTH};
use crate::moves::Move;

const ROWS: usize = BOARD_HEIGHT as usize;
const COLS: usize = BOARD_WIDTH as usize;

/// Cell array indexed `[y][x]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardGrid {
    cells: [[CellState; COLS]; ROWS],
}

impl BoardGrid {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell state at `square`, `None` when off the board.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<CellState> {
        if square.is_on_board() {
            Some(self.cells[square.y as usize][square.x as usize])
        } else {
            None
        }
    }

    /// Whether `mv` may be placed with color `placing`.
    ///
    /// Every occupied square must be on the board and accept the color.
    #[must_use]
    pub fn is_legal(&self, mv: &Move, placing: CellState) -> bool {
        self.fits(mv.form.iter().copied(), placing)
    }

    /// Placement test for an arbitrary set of absolute squares.
    #[must_use]
    pub fn fits(&self, mut squares: impl Iterator<Item = Square>, placing: CellState) -> bool {
        squares.all(|sq| self.get(sq).is_some_and(|cell| cell.accepts(placing)))
    }

    /// Overwrite on-board squares with `color`.
    pub fn apply(&mut self, squares: &[Square], color: CellState) {
        for sq in squares.iter().filter(|sq| sq.is_on_board()) {
            self.cells[sq.y as usize][sq.x as usize] = color;
        }
    }

    /// Reset on-board squares to empty.
    pub fn clear(&mut self, squares: &[Square]) {
        self.apply(squares, CellState::Empty);
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn rows(&self) -> &[[CellState; COLS]; ROWS] {
        &self.cells
    }

    /// Number of cells currently in `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Raw dump: one line per row, each cell as its number and a space.
    #[must_use]
    pub fn to_grid_string(&self) -> String {
        let mut out = String::with_capacity(ROWS * (COLS * 2 + 1));
        for row in &self.cells {
            for cell in row {
                let _ = write!(out, "{} ", cell.raw());
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for BoardGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_grid_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{BuildingType, Rotation};

    fn mv(building: BuildingType, rotation: Rotation, x: i32, y: i32) -> Move {
        Move::new(Square::new(x, y), building, rotation).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = BoardGrid::new();
        assert_eq!(board.count(CellState::Empty), 100);
        assert_eq!(board.get(Square::new(4, 4)), Some(CellState::Empty));
        assert_eq!(board.get(Square::new(10, 4)), None);
    }

    #[test]
    fn test_legal_on_empty_board() {
        let board = BoardGrid::new();
        let stable = mv(BuildingType::Stable, Rotation::R0, 3, 3);
        assert!(board.is_legal(&stable, CellState::White));
    }

    #[test]
    fn test_off_board_is_illegal() {
        let board = BoardGrid::new();
        let stable = mv(BuildingType::Stable, Rotation::R0, 9, 3);
        assert!(!board.is_legal(&stable, CellState::White));

        let bridge = mv(BuildingType::Bridge, Rotation::R0, 5, 0);
        assert!(!board.is_legal(&bridge, CellState::Black));
    }

    #[test]
    fn test_occupied_is_illegal() {
        let mut board = BoardGrid::new();
        board.apply(&[Square::new(3, 3)], CellState::Black);

        let tavern = mv(BuildingType::Tavern, Rotation::R0, 3, 3);
        assert!(!board.is_legal(&tavern, CellState::Black));
        assert!(!board.is_legal(&tavern, CellState::White));
    }

    #[test]
    fn test_region_only_for_owner() {
        let mut board = BoardGrid::new();
        board.apply(&[Square::new(0, 0)], CellState::WhiteRegion);

        let tavern = mv(BuildingType::Tavern, Rotation::R0, 0, 0);
        assert!(board.is_legal(&tavern, CellState::White));
        assert!(!board.is_legal(&tavern, CellState::Black));
        assert!(!board.is_legal(&tavern, CellState::Blue));
    }

    #[test]
    fn test_clear() {
        let mut board = BoardGrid::new();
        let squares = [Square::new(1, 1), Square::new(2, 1)];
        board.apply(&squares, CellState::White);
        assert_eq!(board.count(CellState::White), 2);

        board.clear(&squares);
        assert_eq!(board.count(CellState::Empty), 100);
    }

    #[test]
    fn test_apply_ignores_off_board() {
        let mut board = BoardGrid::new();
        board.apply(&[Square::new(-1, 0), Square::new(0, 0)], CellState::Black);
        assert_eq!(board.count(CellState::Black), 1);
    }

    #[test]
    fn test_grid_string() {
        let mut board = BoardGrid::new();
        board.apply(&[Square::new(1, 0)], CellState::White);

        let dump = board.to_grid_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0 4 0 0 0 0 0 0 0 0 ");
        assert_eq!(lines[1], "0 0 0 0 0 0 0 0 0 0 ");
    }
}
