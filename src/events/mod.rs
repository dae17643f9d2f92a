//! Events emitted by the rules engine.
//!
//! The engine has no subscriber registry: each transition hands its events
//! back to the caller, and the caller re-renders from
//! [`Game::snapshot`](crate::rules::Game::snapshot).

pub mod event;

pub use event::{Events, GameEvent};
