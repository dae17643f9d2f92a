//! Cell contents and cell addressing.

use serde::{Deserialize, Serialize};

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardCell {
    #[default]
    Empty,
    Green,
    Red,
}

/// Index of a cell on a 3x3 board, row-major.
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

/// A raw cell number that is not on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell {0} is not on a 3x3 board")]
pub struct CellOutOfRange(pub u8);

impl CellIndex {
    /// Number of cells on a board.
    pub const COUNT: usize = 9;

    /// The center cell.
    pub const CENTER: CellIndex = CellIndex(4);

    /// Create a cell index. Panics when `index` is not on the board.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT, "cell index out of range");
        Self(index)
    }

    /// Create a cell index from row and column (both 0..3).
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "row/column out of range");
        Self(row * 3 + col)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// All nine cells in order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..Self::COUNT as u8).map(CellIndex)
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = CellOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(CellOutOfRange(value))
        }
    }
}

impl From<CellIndex> for u8 {
    fn from(cell: CellIndex) -> u8 {
        cell.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}
