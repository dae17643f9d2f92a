//! The 3x3 placement board and win detection.

use serde::{Deserialize, Serialize};

use super::cell::{BoardCell, CellIndex};

/// The eight lines that win a round when filled with green.
pub const WINNING_LINES: [[CellIndex; 3]; 8] = {
    const fn line(a: u8, b: u8, c: u8) -> [CellIndex; 3] {
        [CellIndex::new(a), CellIndex::new(b), CellIndex::new(c)]
    }
    [
        // Rows
        line(0, 1, 2),
        line(3, 4, 5),
        line(6, 7, 8),
        // Columns
        line(0, 3, 6),
        line(1, 4, 7),
        line(2, 5, 8),
        // Diagonals
        line(0, 4, 8),
        line(2, 4, 6),
    ]
};

/// One player's board.
///
/// Every mutation is permissive: when the precondition does not hold the
/// call leaves the board untouched and reports `false` rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [BoardCell; CellIndex::COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells (row-major).
    #[must_use]
    pub const fn from_cells(cells: [BoardCell; CellIndex::COUNT]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cell(&self, cell: CellIndex) -> BoardCell {
        self.cells[cell.index()]
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[BoardCell; CellIndex::COUNT] {
        &self.cells
    }

    // === Placement ===

    /// Put a green chip on an empty cell.
    pub fn place_green(&mut self, cell: CellIndex) -> bool {
        self.replace_if(cell, |c| c == BoardCell::Empty, BoardCell::Green)
    }

    /// Put a red chip on any cell that is not already red.
    ///
    /// A red chip covers a green one.
    pub fn place_red(&mut self, cell: CellIndex) -> bool {
        self.replace_if(cell, |c| c != BoardCell::Red, BoardCell::Red)
    }

    /// Clear a red chip.
    pub fn remove_red(&mut self, cell: CellIndex) -> bool {
        self.replace_if(cell, |c| c == BoardCell::Red, BoardCell::Empty)
    }

    /// Put a red chip on an empty cell.
    pub fn restore_red(&mut self, cell: CellIndex) -> bool {
        self.replace_if(cell, |c| c == BoardCell::Empty, BoardCell::Red)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [BoardCell::Empty; CellIndex::COUNT];
    }

    fn replace_if(&mut self, cell: CellIndex, allowed: impl Fn(BoardCell) -> bool, to: BoardCell) -> bool {
        let slot = &mut self.cells[cell.index()];
        if allowed(*slot) {
            *slot = to;
            true
        } else {
            false
        }
    }

    // === Queries ===

    /// First all-green line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&c| self.cell(c) == BoardCell::Green))
            .copied()
    }

    /// Does any line consist entirely of green chips?
    #[must_use]
    pub fn has_winning_line(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Number of cells holding `kind`.
    #[must_use]
    pub fn count(&self, kind: BoardCell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Cells a green chip could go on.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(|&c| self.cell(c) == BoardCell::Empty)
    }

    /// Cells a red chip could go on.
    pub fn cells_without_red(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(|&c| self.cell(c) != BoardCell::Red)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let glyph = match cell {
                    BoardCell::Empty => '.',
                    BoardCell::Green => 'G',
                    BoardCell::Red => 'R',
                };
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BoardCell::{Empty as E, Green as G, Red as R};

    fn board_with(kind: BoardCell, cells: &[u8]) -> Board {
        let mut raw = [E; 9];
        for &c in cells {
            raw[c as usize] = kind;
        }
        Board::from_cells(raw)
    }

    #[test]
    fn test_every_green_line_wins() {
        for line in WINNING_LINES {
            let idx: Vec<u8> = line.iter().map(|c| c.index() as u8).collect();
            let board = board_with(G, &idx);
            assert!(board.has_winning_line(), "line {:?} should win", idx);
            assert_eq!(board.winning_line(), Some(line));
        }
    }

    #[test]
    fn test_explicit_lines() {
        let lines: [[u8; 3]; 8] = [
            [0, 1, 2], [3, 4, 5], [6, 7, 8],
            [0, 3, 6], [1, 4, 7], [2, 5, 8],
            [0, 4, 8], [2, 4, 6],
        ];
        for line in lines {
            assert!(board_with(G, &line).has_winning_line());
        }
    }

    #[test]
    fn test_red_lines_never_win() {
        for line in WINNING_LINES {
            let idx: Vec<u8> = line.iter().map(|c| c.index() as u8).collect();
            assert!(!board_with(R, &idx).has_winning_line());
        }
        assert!(!Board::from_cells([R; 9]).has_winning_line());
    }

    #[test]
    fn test_empty_and_mixed_boards_do_not_win() {
        assert!(!Board::new().has_winning_line());
        // Every line blocked by a red or an empty
        let board = Board::from_cells([G, G, R, G, R, G, R, G, G]);
        assert!(!board.has_winning_line());
        // Non-line green triplet
        assert!(!board_with(G, &[0, 1, 3]).has_winning_line());
    }

    #[test]
    fn test_place_green_only_on_empty() {
        let mut board = board_with(R, &[1]);

        assert!(board.place_green(CellIndex::new(0)));
        assert_eq!(board.cell(CellIndex::new(0)), G);

        assert!(!board.place_green(CellIndex::new(0)));
        assert!(!board.place_green(CellIndex::new(1)));
        assert_eq!(board.cell(CellIndex::new(1)), R);
    }

    #[test]
    fn test_place_red_covers_green() {
        let mut board = board_with(G, &[4]);

        assert!(board.place_red(CellIndex::CENTER));
        assert_eq!(board.cell(CellIndex::CENTER), R);
        assert!(!board.place_red(CellIndex::CENTER));

        assert!(board.place_red(CellIndex::new(0)));
        assert_eq!(board.count(R), 2);
    }

    #[test]
    fn test_remove_red_only_on_red() {
        let mut board = Board::from_cells([R, G, E, E, E, E, E, E, E]);

        assert!(board.remove_red(CellIndex::new(0)));
        assert_eq!(board.cell(CellIndex::new(0)), E);
        assert!(!board.remove_red(CellIndex::new(0)));
        assert!(!board.remove_red(CellIndex::new(1)));
        assert_eq!(board.cell(CellIndex::new(1)), G);
    }

    #[test]
    fn test_restore_red_only_on_empty() {
        let mut board = Board::from_cells([G, E, E, E, E, E, E, E, E]);

        assert!(!board.restore_red(CellIndex::new(0)));
        assert_eq!(board.cell(CellIndex::new(0)), G);
        assert!(board.restore_red(CellIndex::new(8)));
        assert_eq!(board.cell(CellIndex::new(8)), R);
        assert!(!board.restore_red(CellIndex::new(8)));
    }

    #[test]
    fn test_cell_queries() {
        let board = Board::from_cells([G, R, E, E, R, G, E, E, E]);

        assert_eq!(board.count(G), 2);
        assert_eq!(board.count(R), 2);
        assert_eq!(board.empty_cells().count(), 5);
        let open: Vec<usize> = board.cells_without_red().map(CellIndex::index).collect();
        assert_eq!(open, vec![0, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_cells([G; 9]);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = Board::from_cells([G, R, E, E, G, E, E, E, G]);
        assert_eq!(board.to_string(), "GR.\n.G.\n..G");
    }
}
