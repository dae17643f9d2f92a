//! Core table types: players, roster, turn state, actions, RNG, configuration.
//!
//! Nothing in here knows the turn rules. The state machine in
//! [`rules`](crate::rules) drives these types; presentation reads them back
//! through [`GameSnapshot`].

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod roster;
pub mod state;

pub use action::{Action, ActionKind, WildAction};
pub use config::{clamp_player_count, GameConfig, MAX_PLAYERS, MAX_ROLLS, MIN_PLAYERS, STARTING_HEARTS};
pub use player::{PlayerId, PlayerMap};
pub use rng::DiceRng;
pub use roster::{Player, PlayerColor, Roster};
pub use state::{DiceSet, GamePhase, GameSnapshot, RollRecord, RoundState};
