//! Dice faces and outcome resolution.
//!
//! A turn is built around rolling three dice:
//! - a green or red triple earns a green chip placement
//! - a yellow triple opens the wild menu
//! - anything else is a miss

pub mod color;
pub mod outcome;

pub use color::{DiceColor, Die};
pub use outcome::{classify, Outcome};
