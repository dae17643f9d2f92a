//! Game configuration.
//!
//! The only tunable rule is the number of seats. Everything else is a
//! fixed constant of the game.

use serde::{Deserialize, Serialize};

/// Fewest players a table can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a table can seat.
pub const MAX_PLAYERS: usize = 6;

/// Hearts each player starts a game with.
pub const STARTING_HEARTS: u8 = 4;

/// Rolls a player gets per turn to land a triple.
pub const MAX_ROLLS: u8 = 3;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seated players, always within
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
    player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` players, clamped to the
    /// supported range.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::default().with_player_count(player_count)
    }

    /// Set the player count, clamped to the supported range.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = clamp_player_count(player_count);
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }
}

/// Clamp a requested seat count into [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
#[must_use]
pub fn clamp_player_count(requested: usize) -> usize {
    requested.clamp(MIN_PLAYERS, MAX_PLAYERS)
}
