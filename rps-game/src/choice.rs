//! Choice set and the beats-relation between choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// A hand a player can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every choice, in rendering order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Lowercase identifier used in markup and by callers passing names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Capitalised display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rock => "🗿",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }

    /// The single choice this one beats.
    #[must_use]
    pub const fn defeats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        self.defeats() == other
    }

    /// Stable index into [`Choice::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
        }
    }

    /// Inverse of [`Choice::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a lowercase choice name. Labels, padding and other casings are
    /// not names.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidChoice`] for names outside the choice set.
    pub fn parse(name: &str) -> Result<Self, GameError> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.name() == name)
            .ok_or_else(|| GameError::invalid_choice(name))
    }
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of every choice, for rendering selectable options.
#[must_use]
pub const fn list_choices() -> [Choice; 3] {
    Choice::ALL
}

/// Materialised beats-relation: `entries[i] = (winner, loser)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    entries: Vec<(Choice, Choice)>,
}

impl RuleTable {
    /// The classic relation: rock → scissors → paper → rock.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(vec![
            (Choice::Rock, Choice::Scissors),
            (Choice::Paper, Choice::Rock),
            (Choice::Scissors, Choice::Paper),
        ])
    }

    /// Build a table from explicit entries; pair with [`RuleTable::validate`].
    #[must_use]
    pub const fn from_entries(entries: Vec<(Choice, Choice)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[(Choice, Choice)] {
        &self.entries
    }

    /// Which choice `winner` defeats, if the table has an entry for it.
    #[must_use]
    pub fn defeated_by(&self, winner: Choice) -> Option<Choice> {
        self.entries
            .iter()
            .find(|(w, _)| *w == winner)
            .map(|(_, loser)| *loser)
    }

    /// Whichever of the two choices wins, or `None` for a tie.
    #[must_use]
    pub fn winner_of(&self, a: Choice, b: Choice) -> Option<Choice> {
        if self.defeated_by(a) == Some(b) {
            Some(a)
        } else if self.defeated_by(b) == Some(a) {
            Some(b)
        } else {
            None
        }
    }

    /// Check the table is a 3-cycle over the choice set.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.entries.len() != Choice::ALL.len() {
            return Err(format!(
                "expected {} entries, found {}",
                Choice::ALL.len(),
                self.entries.len()
            ));
        }
        for choice in Choice::ALL {
            let count = self.entries.iter().filter(|(w, _)| *w == choice).count();
            if count != 1 {
                return Err(format!("{choice} has {count} entries"));
            }
        }
        if let Some((w, _)) = self.entries.iter().find(|(w, l)| w == l) {
            return Err(format!("{w} beats itself"));
        }
        let mut current = Choice::Rock;
        for _ in 0..Choice::ALL.len() {
            current = self
                .defeated_by(current)
                .ok_or_else(|| format!("{current} has no entry"))?;
        }
        if current != Choice::Rock {
            return Err("relation is not a 3-cycle".to_string());
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
