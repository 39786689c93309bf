use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Who is currently ahead on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    Player,
    Computer,
    Even,
}

/// Cumulative win counters for the player and the computer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub player_score: u32,
    pub computer_score: u32,
}

impl ScoreState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
        }
    }

    /// Credit the winner of a round; ties change nothing.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player_score = self.player_score.saturating_add(1),
            Outcome::Lose => self.computer_score = self.computer_score.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.player_score == 0 && self.computer_score == 0
    }

    #[must_use]
    pub const fn leader(&self) -> Leader {
        if self.player_score > self.computer_score {
            Leader::Player
        } else if self.computer_score > self.player_score {
            Leader::Computer
        } else {
            Leader::Even
        }
    }

    /// Decided rounds, i.e. wins on either side.
    #[must_use]
    pub const fn decided(&self) -> u64 {
        self.player_score as u64 + self.computer_score as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_credit_the_right_side() {
        let mut score = ScoreState::new();
        score.apply_outcome(Outcome::Win);
        assert_eq!(
            score,
            ScoreState {
                player_score: 1,
                computer_score: 0
            }
        );
        score.apply_outcome(Outcome::Lose);
        score.apply_outcome(Outcome::Lose);
        assert_eq!(score.computer_score, 2);
        assert_eq!(score.player_score, 1);

        let before = score;
        score.apply_outcome(Outcome::Tie);
        assert_eq!(score, before);
        assert_eq!(score.decided(), 3);
    }

    #[test]
    fn reset_always_zeroes() {
        let mut score = ScoreState {
            player_score: 9,
            computer_score: 4,
        };
        score.reset();
        assert!(score.is_zero());
        assert_eq!(score, ScoreState::default());
    }

    #[test]
    fn leader_tracks_difference() {
        let mut score = ScoreState::new();
        assert_eq!(score.leader(), Leader::Even);
        score.apply_outcome(Outcome::Lose);
        assert_eq!(score.leader(), Leader::Computer);
        score.apply_outcome(Outcome::Win);
        score.apply_outcome(Outcome::Win);
        assert_eq!(score.leader(), Leader::Player);
    }

    #[test]
    fn counters_saturate() {
        let mut score = ScoreState {
            player_score: u32::MAX,
            computer_score: 0,
        };
        score.apply_outcome(Outcome::Win);
        assert_eq!(score.player_score, u32::MAX);
    }
}
