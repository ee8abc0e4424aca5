//! Board coordinates.
//!
//! A `Square` is an integer `(x, y)` pair. The same type is used for
//! absolute board positions (0..=9 on each axis when on the board) and for
//! offsets relative to a building's anchor, which may be negative.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Add;

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 10;

/// Total number of cells on the board.
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Cosine of `index * 90°` for index 0..4.
const COS: [i32; 4] = [1, 0, -1, 0];

/// Sine of `index * 90°` for index 0..4.
const SIN: [i32; 4] = [0, 1, 0, -1];

/// A cell coordinate or a relative offset.
///
/// Ordered row-major: first by `y`, then by `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate around the origin by `rotation_index * 90°`.
    ///
    /// `(x, y)` maps to `(x·c − y·s, y·c + x·s)` with `c = cos`, `s = sin`.
    /// Indices are taken modulo 4.
    ///
    /// ```
    /// use cathedral_engine::core::Square;
    ///
    /// assert_eq!(Square::new(1, 0).rotated(1), Square::new(0, 1));
    /// assert_eq!(Square::new(1, 0).rotated(2), Square::new(-1, 0));
    /// ```
    #[must_use]
    pub const fn rotated(self, rotation_index: usize) -> Self {
        let c = COS[rotation_index % 4];
        let s = SIN[rotation_index % 4];
        Self {
            x: self.x * c - self.y * s,
            y: self.y * c + self.x * s,
        }
    }

    /// The four orthogonal neighbours (right, left, down, up).
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Square; 4] {
        [
            Square::new(self.x + 1, self.y),
            Square::new(self.x - 1, self.y),
            Square::new(self.x, self.y + 1),
            Square::new(self.x, self.y - 1),
        ]
    }

    /// Whether this square lies on the 10×10 board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }

    /// Row-major cell index (`y * 10 + x`), or `None` when off the board.
    #[must_use]
    pub const fn cell_index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * BOARD_WIDTH + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Square::cell_index`].
    #[must_use]
    pub const fn from_cell_index(index: usize) -> Self {
        let index = index as i32;
        Self {
            x: index % BOARD_WIDTH,
            y: index / BOARD_WIDTH,
        }
    }

    /// Iterate over every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).map(Square::from_cell_index)
    }
}

impl Add for Square {
    type Output = Square;

    fn add(self, other: Square) -> Square {
        Square::new(self.x + other.x, self.y + other.y)
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
