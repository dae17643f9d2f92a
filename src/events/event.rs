//! Outbound game events.
//!
//! Every successful transition returns the events it produced, in order.
//! Presentation uses them for effects the snapshot cannot express on its
//! own: the win fanfare, a heart breaking, a chip clinking into place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{BoardCell, CellIndex};
use crate::core::{GamePhase, PlayerId, WildAction};
use crate::dice::{DiceColor, Outcome};

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A game left setup.
    GameStarted { first_player: PlayerId, player_count: usize },

    /// A new turn began.
    TurnStarted { player: PlayerId },

    /// Dice were rolled and classified.
    DiceRolled {
        player: PlayerId,
        roll: u8,
        colors: [DiceColor; 3],
        outcome: Outcome,
    },

    /// A die was marked or unmarked as kept.
    DieKept { die: usize, kept: bool },

    /// An entry of the wild menu was chosen.
    WildChosen { player: PlayerId, action: WildAction },

    /// A cell on `owner`'s board changed.
    BoardChanged {
        owner: PlayerId,
        cell: CellIndex,
        from: BoardCell,
        to: BoardCell,
    },

    /// A placement was requested on a cell that did not allow it.
    PlacementIgnored { owner: PlayerId, cell: CellIndex },

    /// A player completed a green line.
    RoundWon {
        winner: PlayerId,
        line: [CellIndex; 3],
        wins: u32,
    },

    /// A player lost a heart.
    HeartLost { player: PlayerId, hearts_left: u8 },

    /// The game ended. `winner` is the player who won the last round, or
    /// the last player with hearts when the game ended on a miss.
    GameOver { winner: Option<PlayerId> },

    /// The game went back to setup.
    ReturnedToSetup,

    /// The phase changed.
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Events produced by one transition. Most transitions emit at most four.
pub type Events = SmallVec<[GameEvent; 4]>;

impl GameEvent {
    /// Should presentation play the win fanfare for this event?
    #[must_use]
    pub fn is_fanfare(&self) -> bool {
        matches!(self, GameEvent::RoundWon { .. } | GameEvent::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fanfare_events() {
        let won = GameEvent::RoundWon {
            winner: PlayerId::new(0),
            line: [CellIndex::new(0), CellIndex::new(1), CellIndex::new(2)],
            wins: 1,
        };
        assert!(won.is_fanfare());
        assert!(GameEvent::GameOver { winner: None }.is_fanfare());
        assert!(!GameEvent::TurnStarted { player: PlayerId::new(1) }.is_fanfare());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::HeartLost {
            player: PlayerId::new(2),
            hearts_left: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
