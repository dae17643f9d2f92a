//! Outcome resolution for a roll of three dice.

use serde::{Deserialize, Serialize};

use super::color::DiceColor;

/// What a roll of three dice amounts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All three dice show the same color.
    Triple(DiceColor),
    /// Anything else.
    NoMatch,
}

impl Outcome {
    /// A yellow triple, which opens the wild menu.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Outcome::Triple(DiceColor::Yellow))
    }

    /// The matched color, if any.
    #[must_use]
    pub const fn color(self) -> Option<DiceColor> {
        match self {
            Outcome::Triple(color) => Some(color),
            Outcome::NoMatch => None,
        }
    }
}

/// Classify three dice.
///
/// Only one color can reach a count of three, so there is never a tie.
///
/// ```
/// use all_or_nothing::dice::{classify, DiceColor::*, Outcome};
///
/// assert_eq!(classify(&[Red, Red, Red]), Outcome::Triple(Red));
/// assert_eq!(classify(&[Red, Green, Red]), Outcome::NoMatch);
/// ```
#[must_use]
pub fn classify(dice: &[DiceColor; 3]) -> Outcome {
    let [first, rest @ ..] = dice;
    if rest.iter().all(|color| color == first) {
        Outcome::Triple(*first)
    } else {
        Outcome::NoMatch
    }
}
