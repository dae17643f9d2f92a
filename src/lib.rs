//! # all-or-nothing
//!
//! Rules engine for a pass-and-play dice game. Two to six players take
//! turns rolling three colored dice to earn chips on their own 3x3 board;
//! the first to line up three green chips wins the round and every other
//! player loses a heart. The last player with hearts wins the game.
//!
//! ## Design Principles
//!
//! 1. **One authoritative phase**: [`GamePhase`] is the only discriminant
//!    of the state machine, and every transition matches on it.
//!
//! 2. **N-Player First**: every per-player collection is a [`PlayerMap`]
//!    sized from the configured player count.
//!
//! 3. **Values out, actions in**: callers drive the engine with named
//!    transitions (or [`Action`] values) and render from [`GameSnapshot`]
//!    plus the returned [`GameEvent`]s.
//!
//! ## Modules
//!
//! - `core`: players, roster, turn state, actions, RNG, configuration
//! - `dice`: die faces and triple classification
//! - `board`: the 3x3 chip board and its winning lines
//! - `rules`: the [`Game`] state machine and the wild menu
//! - `events`: events returned by transitions
//!
//! ## Example
//!
//! ```
//! use all_or_nothing::{DiceColor, Game, GameConfig, GamePhase};
//!
//! let mut game = Game::new(GameConfig::new(3));
//! game.start_game().unwrap();
//! game.roll_dice([DiceColor::Red; 3]).unwrap();
//! assert_eq!(game.phase(), GamePhase::Placing);
//! ```

pub mod board;
pub mod core;
pub mod dice;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, WildAction,
    GameConfig, MAX_PLAYERS, MAX_ROLLS, MIN_PLAYERS, STARTING_HEARTS,
    PlayerId, PlayerMap,
    DiceRng,
    Player, PlayerColor, Roster,
    DiceSet, GamePhase, GameSnapshot, RollRecord, RoundState,
};

pub use crate::dice::{classify, DiceColor, Die, Outcome};

pub use crate::board::{Board, BoardCell, CellIndex, CellOutOfRange, WINNING_LINES};

pub use crate::rules::{wild_options, Game, IllegalAction, TransitionResult, WildOption};

pub use crate::events::{Events, GameEvent};
