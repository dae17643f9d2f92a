//! Game state: phase, per-turn state and the outbound snapshot.
//!
//! ## GamePhase
//!
//! The single authoritative discriminant of the state machine. Every
//! transition in [`rules`](crate::rules) matches on it exhaustively.
//!
//! ## RoundState
//!
//! Everything that belongs to the turn in progress: whose turn it is, how
//! many rolls were used, the dice on the table and any pending wild
//! action.
//!
//! ## GameSnapshot
//!
//! A value copy of everything presentation renders. Taking a snapshot is
//! cheap: boards and players are small, and the roll history is a
//! persistent `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::WildAction;
use super::player::{PlayerId, PlayerMap};
use super::roster::Player;
use crate::board::Board;
use crate::dice::{DiceColor, Die};

/// State machine discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choosing player count and names.
    #[default]
    Setup,
    /// Waiting for a roll, or for a cell when a wild action is pending.
    Playing,
    /// A green or red triple was rolled; waiting for a green placement.
    Placing,
    /// Transient, only held while a placement is being scored.
    CheckingWin,
    /// The turn is over; waiting for the next turn.
    RoundEnd,
    /// At most one player has hearts left.
    GameOver,
    /// A yellow triple was rolled; waiting for a wild action.
    WildMenu,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::Playing => "playing",
            GamePhase::Placing => "placing",
            GamePhase::CheckingWin => "checking-win",
            GamePhase::RoundEnd => "round-end",
            GamePhase::GameOver => "game-over",
            GamePhase::WildMenu => "wild-menu",
        };
        f.write_str(name)
    }
}

/// Dice on the table: none before the first roll, three afterwards.
pub type DiceSet = SmallVec<[Die; 3]>;

/// One entry of the roll history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// Roll number within the turn (1-based).
    pub roll: u8,
    /// The faces that came up.
    pub colors: [DiceColor; 3],
}

/// State of the turn in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Rolls used this turn, never above `MAX_ROLLS`.
    pub roll_count: u8,

    /// Dice on the table.
    pub dice: DiceSet,

    /// Set by a wild triple, cleared by any other roll and at turn start.
    pub last_wild_color: Option<DiceColor>,

    /// Wild action chosen from the menu, waiting for a cell.
    pub pending_wild: Option<WildAction>,

    /// Winner of the round that just ended, if it ended with a win.
    pub round_winner: Option<PlayerId>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            current_player: PlayerId::new(0),
            roll_count: 0,
            dice: SmallVec::new(),
            last_wild_color: None,
            pending_wild: None,
            round_winner: None,
        }
    }
}

impl RoundState {
    /// Start a fresh turn for `player`.
    pub fn begin_turn(&mut self, player: PlayerId) {
        self.current_player = player;
        self.roll_count = 0;
        self.dice.clear();
        self.last_wild_color = None;
        self.pending_wild = None;
        self.round_winner = None;
    }

    /// Colors currently showing, if dice have been rolled.
    #[must_use]
    pub fn colors(&self) -> Option<[DiceColor; 3]> {
        match self.dice.as_slice() {
            [a, b, c] => Some([a.color, b.color, c.color]),
            _ => None,
        }
    }
}

/// Everything presentation needs to render a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub current_player: PlayerId,
    pub players: Vec<Player>,
    pub boards: PlayerMap<Board>,
    pub roll_count: u8,
    pub dice: DiceSet,
    pub last_wild_color: Option<DiceColor>,
    pub pending_wild: Option<WildAction>,
    pub round_winner: Option<PlayerId>,
    pub roll_history: Vector<RollRecord>,
}
