//! Placement boards.
//!
//! Each player owns a 3x3 board. Green chips come from triples and from
//! the wild menu; red chips are blockers placed by opponents. A board wins
//! the round when any row, column or diagonal is entirely green.

pub mod cell;
pub mod grid;

pub use cell::{BoardCell, CellIndex, CellOutOfRange};
pub use grid::{Board, WINNING_LINES};
