//! Die faces and per-die state.

use serde::{Deserialize, Serialize};

/// The face a die lands on.
///
/// Each color takes an equal third of the unit interval in
/// [`DiceColor::from_unit`]. Yellow is the wild color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceColor {
    Green,
    Red,
    Yellow,
}

impl DiceColor {
    /// All colors, in bucket order.
    pub const ALL: [DiceColor; 3] = [DiceColor::Green, DiceColor::Red, DiceColor::Yellow];

    /// Map a uniform sample in `[0, 1)` onto a color.
    ///
    /// `[0, 1/3)` is green, `[1/3, 2/3)` is red and `[2/3, 1)` is yellow.
    ///
    /// ```
    /// use all_or_nothing::dice::DiceColor;
    ///
    /// assert_eq!(DiceColor::from_unit(0.0), DiceColor::Green);
    /// assert_eq!(DiceColor::from_unit(0.5), DiceColor::Red);
    /// assert_eq!(DiceColor::from_unit(0.9), DiceColor::Yellow);
    /// ```
    #[must_use]
    pub fn from_unit(sample: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&sample), "sample {} outside [0, 1)", sample);
        if sample < 1.0 / 3.0 {
            DiceColor::Green
        } else if sample < 2.0 / 3.0 {
            DiceColor::Red
        } else {
            DiceColor::Yellow
        }
    }

    /// Is this the wild color?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, DiceColor::Yellow)
    }
}

impl std::fmt::Display for DiceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiceColor::Green => "Green",
            DiceColor::Red => "Red",
            DiceColor::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// One die on the table.
///
/// `kept` survives re-rolls within a turn and is cleared when the next
/// turn starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub color: DiceColor,
    pub kept: bool,
}

impl Die {
    /// A freshly rolled, unkept die.
    #[must_use]
    pub const fn rolled(color: DiceColor) -> Self {
        Self { color, kept: false }
    }
}
