//! Turn and round rules.
//!
//! [`Game`] is the only rules engine: a phase-driven state machine whose
//! transitions either succeed with a list of [`GameEvent`](crate::events::GameEvent)s
//! or fail with an [`IllegalAction`] and leave the table untouched.

pub mod engine;
pub mod error;
pub mod wild;

pub use engine::{Game, TransitionResult};
pub use error::IllegalAction;
pub use wild::{wild_options, WildOption};
