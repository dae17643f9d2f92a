//! Property tests for dice classification, win detection and game flow.

use proptest::prelude::*;

use all_or_nothing::{
    classify, Board, BoardCell, CellIndex, DiceColor, Game, GameConfig, GamePhase, Outcome,
    WildAction, STARTING_HEARTS,
};

fn dice_color() -> impl Strategy<Value = DiceColor> {
    prop_oneof![
        Just(DiceColor::Green),
        Just(DiceColor::Red),
        Just(DiceColor::Yellow),
    ]
}

fn board_cell() -> impl Strategy<Value = BoardCell> {
    prop_oneof![
        Just(BoardCell::Empty),
        Just(BoardCell::Green),
        Just(BoardCell::Red),
    ]
}

/// One player input, resolved against whatever phase the game is in.
#[derive(Clone, Debug)]
enum Input {
    Roll([DiceColor; 3]),
    Cell(u8),
    Wild(usize),
    Toggle(usize),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => proptest::array::uniform3(dice_color()).prop_map(Input::Roll),
        3 => (0u8..9).prop_map(Input::Cell),
        1 => (0usize..4).prop_map(Input::Wild),
        1 => (0usize..3).prop_map(Input::Toggle),
    ]
}

/// Line check written out by rows, columns and diagonals.
fn brute_force_win(cells: &[BoardCell; 9]) -> bool {
    let green = |r: usize, c: usize| cells[r * 3 + c] == BoardCell::Green;
    (0..3).any(|r| (0..3).all(|c| green(r, c)))
        || (0..3).any(|c| (0..3).all(|r| green(r, c)))
        || (0..3).all(|i| green(i, i))
        || (0..3).all(|i| green(i, 2 - i))
}

fn drive(game: &mut Game, step: &Input) {
    match game.phase() {
        GamePhase::Playing => match *step {
            Input::Roll(colors) => {
                let _ = game.roll_dice(colors);
            }
            Input::Cell(c) => {
                let _ = game.place_cell(CellIndex::new(c));
            }
            Input::Toggle(d) => {
                if !game.round().dice.is_empty() && game.round().pending_wild.is_none() {
                    game.toggle_kept(d).unwrap();
                }
            }
            Input::Wild(_) => {}
        },
        GamePhase::Placing => {
            let cell = match *step {
                Input::Cell(c) => c,
                _ => 4,
            };
            game.place_cell(CellIndex::new(cell)).unwrap();
        }
        GamePhase::WildMenu => {
            let index = match *step {
                Input::Wild(i) => i,
                _ => 0,
            };
            let _ = game.choose_wild(WildAction::ALL[index]);
        }
        GamePhase::RoundEnd => {
            game.next_turn().unwrap();
        }
        GamePhase::Setup | GamePhase::CheckingWin | GamePhase::GameOver => {}
    }
}

proptest! {
    #[test]
    fn prop_classify_ignores_order(a in dice_color(), b in dice_color(), c in dice_color()) {
        let expected = classify(&[a, b, c]);
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(classify(&perm), expected);
        }
    }

    #[test]
    fn prop_classify_triple_iff_all_equal(dice in proptest::array::uniform3(dice_color())) {
        let all_equal = dice[0] == dice[1] && dice[1] == dice[2];
        match classify(&dice) {
            Outcome::Triple(color) => {
                prop_assert!(all_equal);
                prop_assert_eq!(color, dice[0]);
            }
            Outcome::NoMatch => prop_assert!(!all_equal),
        }
    }

    #[test]
    fn prop_win_check_matches_definition(cells in proptest::array::uniform9(board_cell())) {
        let board = Board::from_cells(cells);
        prop_assert_eq!(board.has_winning_line(), brute_force_win(&cells));
        if let Some(line) = board.winning_line() {
            prop_assert!(line.iter().all(|&c| board.cell(c) == BoardCell::Green));
        }
    }

    #[test]
    fn prop_counts_cover_board(cells in proptest::array::uniform9(board_cell())) {
        let board = Board::from_cells(cells);
        let total = board.count(BoardCell::Empty)
            + board.count(BoardCell::Green)
            + board.count(BoardCell::Red);
        prop_assert_eq!(total, CellIndex::COUNT);
    }

    #[test]
    fn prop_random_games_keep_invariants(
        player_count in 2usize..=6,
        steps in proptest::collection::vec(input(), 1..400),
    ) {
        let mut game = Game::new(GameConfig::new(player_count));
        game.start_game().unwrap();

        for step in &steps {
            drive(&mut game, step);

            prop_assert_ne!(game.phase(), GamePhase::CheckingWin);
            prop_assert!(game.round().roll_count <= 3);
            for player in game.roster().iter() {
                prop_assert!(player.hearts <= STARTING_HEARTS);
            }
            if game.round().pending_wild.is_some() {
                prop_assert_eq!(game.phase(), GamePhase::Playing);
            }
            if game.phase() == GamePhase::Placing || game.phase() == GamePhase::WildMenu {
                prop_assert!(game.round().colors().is_some());
            }
            if game.phase() == GamePhase::GameOver {
                let survivors = game.roster().survivors().count();
                let sole_winner = game
                    .round()
                    .round_winner
                    .map_or(false, |w| game.roster().others_eliminated(w));
                prop_assert!(survivors <= 1 || sole_winner);
                break;
            }
        }
    }
}
