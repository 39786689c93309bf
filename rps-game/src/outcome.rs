//! Outcome engine: who won a round and why.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::choice::Choice;

pub const TIE_EXPLANATION: &str = "Both players chose the same!";

/// Canned sentences keyed by `(winner, loser)`.
const EXPLANATIONS: [((Choice, Choice), &str); 3] = [
    ((Choice::Rock, Choice::Scissors), "Rock crushes Scissors"),
    ((Choice::Paper, Choice::Rock), "Paper covers Rock"),
    ((Choice::Scissors, Choice::Paper), "Scissors cuts Paper"),
];

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Banner shown above the explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You Win! 🎉",
            Self::Lose => "You Lose! 😢",
            Self::Tie => "It's a Tie! 🤝",
        }
    }

    /// Class name the result panel is styled with.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
        }
    }

    /// The same round seen from the other side.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Decide a round. Total over all nine pairs.
#[must_use]
pub fn determine_outcome(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Sentence describing why the round went the way it did.
///
/// Returns an empty string when `outcome` does not match the choices.
#[must_use]
pub fn explain(player: Choice, computer: Choice, outcome: Outcome) -> &'static str {
    let (winner, loser) = match outcome {
        Outcome::Tie => return TIE_EXPLANATION,
        Outcome::Win => (player, computer),
        Outcome::Lose => (computer, player),
    };
    EXPLANATIONS
        .iter()
        .find(|(pair, _)| *pair == (winner, loser))
        .map_or("", |(_, text)| *text)
}
