//! Player registry: identity, hearts and win tallies.
//!
//! The roster is created during setup and mutated only by the rules
//! engine. Hearts are the elimination currency: a player at zero hearts
//! is out of contention, although they keep their seat in the turn order.

use serde::{Deserialize, Serialize};

use super::config::{clamp_player_count, STARTING_HEARTS};
use super::player::{PlayerId, PlayerMap};

/// Display color of a seat. Has no gameplay meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerColor(pub u32);

impl PlayerColor {
    /// Fixed per-seat palette.
    pub const PALETTE: [PlayerColor; 6] = [
        PlayerColor(0xff4444),
        PlayerColor(0x00ff88),
        PlayerColor(0x00ffff),
        PlayerColor(0xffdd00),
        PlayerColor(0xff88ff),
        PlayerColor(0xff9900),
    ];

    /// The palette entry for a seat.
    #[must_use]
    pub fn for_seat(player: PlayerId) -> Self {
        Self::PALETTE[player.index() % Self::PALETTE.len()]
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    /// Remaining hearts, always within `0..=STARTING_HEARTS`.
    pub hearts: u8,
    /// Rounds won this game.
    pub wins: u32,
}

impl Player {
    /// A fresh player with the default name for their seat.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {}", id.index() + 1),
            color: PlayerColor::for_seat(id),
            hearts: STARTING_HEARTS,
            wins: 0,
        }
    }

    /// Still has at least one heart.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hearts > 0
    }
}

/// All players at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: PlayerMap<Player>,
}

impl Roster {
    /// Seat `player_count` players (clamped to 2..=6).
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let player_count = clamp_player_count(player_count);
        Self {
            players: PlayerMap::new(player_count, Player::new),
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Iterate over players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Rename a player. Any string is accepted, including the empty one.
    pub fn set_name(&mut self, player: PlayerId, name: impl Into<String>) {
        self.players[player].name = name.into();
    }

    /// Take one heart from a player, stopping at zero.
    ///
    /// Returns the hearts left.
    pub fn lose_heart(&mut self, player: PlayerId) -> u8 {
        let entry = &mut self.players[player];
        entry.hearts = entry.hearts.saturating_sub(1);
        entry.hearts
    }

    /// Credit a round win. Returns the new tally.
    pub fn record_win(&mut self, player: PlayerId) -> u32 {
        let entry = &mut self.players[player];
        entry.wins += 1;
        entry.wins
    }

    /// Players who still have hearts.
    pub fn survivors(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
    }

    /// True when every player except `player` is out of hearts.
    #[must_use]
    pub fn others_eliminated(&self, player: PlayerId) -> bool {
        self.players
            .iter()
            .all(|(id, p)| id == player || !p.is_alive())
    }

    /// Restore every player to full hearts and clear win tallies.
    pub fn reset_hearts_and_wins(&mut self) {
        for (_, p) in self.players.iter_mut() {
            p.hearts = STARTING_HEARTS;
            p.wins = 0;
        }
    }
}
