//! The wild menu offered by a yellow triple.
//!
//! Availability only depends on the acting player's own board:
//! - `PlaceGreen` and `PlaceRed` are always offered
//! - `RemoveRed` needs a red chip to remove
//! - `RestoreRed` needs an empty cell and a board that is not all red

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardCell, CellIndex};
use crate::core::{PlayerId, WildAction};

/// One entry of the wild menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildOption {
    pub action: WildAction,
    /// Whose board the action lands on.
    pub target: PlayerId,
    pub available: bool,
}

/// Board a wild action lands on.
///
/// Red chips always go to the next seat; every other action works on the
/// acting player's own board.
#[must_use]
pub fn wild_target(action: WildAction, actor: PlayerId, player_count: usize) -> PlayerId {
    match action {
        WildAction::PlaceRed => actor.next(player_count),
        WildAction::PlaceGreen | WildAction::RemoveRed | WildAction::RestoreRed => actor,
    }
}

/// Is `action` allowed given the actor's own board?
#[must_use]
pub fn is_available(action: WildAction, own_board: &Board) -> bool {
    match action {
        WildAction::PlaceGreen | WildAction::PlaceRed => true,
        WildAction::RemoveRed => own_board.count(BoardCell::Red) > 0,
        WildAction::RestoreRed => {
            own_board.count(BoardCell::Empty) > 0
                && own_board.count(BoardCell::Red) < CellIndex::COUNT
        }
    }
}

/// The full menu, in display order.
#[must_use]
pub fn wild_options(own_board: &Board, actor: PlayerId, player_count: usize) -> [WildOption; 4] {
    WildAction::ALL.map(|action| WildOption {
        action,
        target: wild_target(action, actor, player_count),
        available: is_available(action, own_board),
    })
}

/// Apply a wild action to the target board. Returns whether it changed.
pub fn apply_to_board(action: WildAction, board: &mut Board, cell: CellIndex) -> bool {
    match action {
        WildAction::PlaceGreen => board.place_green(cell),
        WildAction::PlaceRed => board.place_red(cell),
        WildAction::RemoveRed => board.remove_red(cell),
        WildAction::RestoreRed => board.restore_red(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BoardCell::{Empty as E, Green as G, Red as R};

    fn availability(board: &Board) -> Vec<bool> {
        wild_options(board, PlayerId::new(0), 2)
            .iter()
            .map(|o| o.available)
            .collect()
    }

    #[test]
    fn test_empty_board_menu() {
        // No red to remove, plenty of room to restore.
        assert_eq!(availability(&Board::new()), vec![true, true, false, true]);
    }

    #[test]
    fn test_board_with_red() {
        let board = Board::from_cells([R, G, E, E, E, E, E, E, E]);
        assert_eq!(availability(&board), vec![true, true, true, true]);
    }

    #[test]
    fn test_full_board_cannot_restore() {
        let board = Board::from_cells([R, G, G, G, R, G, G, G, R]);
        assert_eq!(availability(&board), vec![true, true, true, false]);
    }

    #[test]
    fn test_all_red_board() {
        let board = Board::from_cells([R; 9]);
        assert_eq!(availability(&board), vec![true, true, true, false]);
    }

    #[test]
    fn test_place_red_targets_next_seat() {
        let menu = wild_options(&Board::new(), PlayerId::new(2), 3);
        assert_eq!(menu[1].action, WildAction::PlaceRed);
        assert_eq!(menu[1].target, PlayerId::new(0));
        for option in [menu[0], menu[2], menu[3]] {
            assert_eq!(option.target, PlayerId::new(2));
        }
    }

    #[test]
    fn test_apply_to_board() {
        let mut board = Board::from_cells([R, E, G, E, E, E, E, E, E]);

        assert!(apply_to_board(WildAction::RemoveRed, &mut board, CellIndex::new(0)));
        assert!(apply_to_board(WildAction::RestoreRed, &mut board, CellIndex::new(1)));
        assert!(apply_to_board(WildAction::PlaceRed, &mut board, CellIndex::new(2)));
        assert!(!apply_to_board(WildAction::PlaceGreen, &mut board, CellIndex::new(2)));

        assert_eq!(board, Board::from_cells([E, R, R, E, E, E, E, E, E]));
    }
}
