//! Rejected requests.
//!
//! Placement onto an occupied cell is not an error: boards absorb those as
//! no-ops. An `IllegalAction` means the request does not fit the current
//! phase at all, and the engine state is left exactly as it was.

use crate::core::{ActionKind, GamePhase, WildAction};

/// Why the engine refused an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalAction {
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: ActionKind, phase: GamePhase },

    #[error("a wild action is waiting for a cell; rolling is not allowed")]
    AwaitingWildPlacement,

    #[error("no wild action is waiting for a cell")]
    NoWildActionPending,

    #[error("wild action {0} is not available on this board")]
    WildActionUnavailable(WildAction),

    #[error("there are no dice on the table to keep")]
    NoDiceToKeep,
}
