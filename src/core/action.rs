//! Inbound actions: everything presentation can ask the engine to do.
//!
//! Each variant maps onto one named transition of [`Game`](crate::rules::Game).
//! The enum form exists so a host can queue, log or replay requests and so
//! [`Game::legal_actions`](crate::rules::Game::legal_actions) can describe
//! which requests the current state accepts.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::CellIndex;
use crate::dice::DiceColor;

/// The four choices offered by a yellow triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildAction {
    /// Green chip on your own board.
    PlaceGreen,
    /// Red chip on the next player's board.
    PlaceRed,
    /// Clear a red chip from your own board.
    RemoveRed,
    /// Red chip on an empty cell of your own board.
    RestoreRed,
}

impl WildAction {
    /// All wild actions in menu order.
    pub const ALL: [WildAction; 4] = [
        WildAction::PlaceGreen,
        WildAction::PlaceRed,
        WildAction::RemoveRed,
        WildAction::RestoreRed,
    ];

    /// Short menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WildAction::PlaceGreen => "Place Green",
            WildAction::PlaceRed => "Place Red",
            WildAction::RemoveRed => "Remove Red",
            WildAction::RestoreRed => "Restore Red",
        }
    }
}

impl std::fmt::Display for WildAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A request from presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Change the number of seats (setup only).
    SetPlayerCount(usize),
    /// Rename a player.
    SetPlayerName(PlayerId, String),
    /// Leave setup and pick a starting player.
    StartGame,
    /// Roll with the engine's own dice, keeping kept dice.
    Roll,
    /// Apply an externally rolled set of dice.
    RollDice([DiceColor; 3]),
    /// Flip the kept flag of one die.
    ToggleKept(usize),
    /// Tap a cell: green placement or the pending wild action.
    PlaceCell(CellIndex),
    /// Pick an entry of the wild menu.
    ChooseWild(WildAction),
    /// Pass the dice to the next seat.
    NextTurn,
    /// Dismiss the game-over screen.
    AcknowledgeGameOver,
    /// Abandon the game and return to setup.
    Reset,
}

impl Action {
    /// The payload-free kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetPlayerCount(_) => ActionKind::SetPlayerCount,
            Action::SetPlayerName(..) => ActionKind::SetPlayerName,
            Action::StartGame => ActionKind::StartGame,
            Action::Roll | Action::RollDice(_) => ActionKind::Roll,
            Action::ToggleKept(_) => ActionKind::ToggleKept,
            Action::PlaceCell(_) => ActionKind::PlaceCell,
            Action::ChooseWild(_) => ActionKind::ChooseWild,
            Action::NextTurn => ActionKind::NextTurn,
            Action::AcknowledgeGameOver => ActionKind::AcknowledgeGameOver,
            Action::Reset => ActionKind::Reset,
        }
    }
}

/// Action kinds, used to report what the current state accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    SetPlayerCount,
    SetPlayerName,
    StartGame,
    Roll,
    ToggleKept,
    PlaceCell,
    ChooseWild,
    NextTurn,
    AcknowledgeGameOver,
    Reset,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::SetPlayerCount => "set player count",
            ActionKind::SetPlayerName => "set player name",
            ActionKind::StartGame => "start game",
            ActionKind::Roll => "roll",
            ActionKind::ToggleKept => "toggle kept die",
            ActionKind::PlaceCell => "place cell",
            ActionKind::ChooseWild => "choose wild action",
            ActionKind::NextTurn => "next turn",
            ActionKind::AcknowledgeGameOver => "acknowledge game over",
            ActionKind::Reset => "reset",
        };
        f.write_str(name)
    }
}
