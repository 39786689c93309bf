//! Round controller: the session state machine the presentation layer drives.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::chooser::{ChoiceSource, RandomChooser};
use crate::error::GameError;
use crate::outcome::{Outcome, determine_outcome, explain};
use crate::score::ScoreState;

/// Immutable record of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
    pub explanation: String,
}

impl RoundResult {
    /// Resolve a round between two known choices.
    #[must_use]
    pub fn resolve(player_choice: Choice, computer_choice: Choice) -> Self {
        let outcome = determine_outcome(player_choice, computer_choice);
        Self {
            player_choice,
            computer_choice,
            outcome,
            explanation: explain(player_choice, computer_choice, outcome).to_string(),
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }
}

/// Where the session sits between rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Ready for a new round.
    #[default]
    Idle,
    /// A result exists that the presentation layer has not acknowledged yet.
    Resolving,
}

/// One player's game against the computer.
///
/// The session owns the scoreboard and the computer's choice source. Callers
/// construct it explicitly and keep it for as long as the game lasts.
#[derive(Debug, Clone)]
pub struct GameSession<C = RandomChooser> {
    chooser: C,
    score: ScoreState,
    phase: RoundPhase,
    last_result: Option<RoundResult>,
    rounds_played: u64,
}

impl GameSession<RandomChooser> {
    /// Session whose computer opponent is seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomChooser::from_seed(seed))
    }
}

impl<C: ChoiceSource> GameSession<C> {
    #[must_use]
    pub const fn new(chooser: C) -> Self {
        Self {
            chooser,
            score: ScoreState::new(),
            phase: RoundPhase::Idle,
            last_result: None,
            rounds_played: 0,
        }
    }

    /// Every choice, in rendering order.
    #[must_use]
    pub const fn list_choices(&self) -> [Choice; 3] {
        Choice::ALL
    }

    /// Start a round from a choice name.
    ///
    /// Returns `Ok(None)` when a round is already resolving; the submission is
    /// ignored and no entropy is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidChoice`] when `name` is not a known choice.
    /// The session is left untouched.
    pub fn start_round(&mut self, name: &str) -> Result<Option<RoundResult>, GameError> {
        let player_choice = Choice::parse(name)?;
        Ok(self.start_round_with(player_choice))
    }

    /// Typed variant of [`GameSession::start_round`].
    pub fn start_round_with(&mut self, player_choice: Choice) -> Option<RoundResult> {
        if self.phase == RoundPhase::Resolving {
            log::trace!("ignoring {player_choice} while a round is resolving");
            return None;
        }

        let computer_choice = self.chooser.pick();
        let result = RoundResult::resolve(player_choice, computer_choice);
        self.score.apply_outcome(result.outcome);
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.phase = RoundPhase::Resolving;
        self.last_result = Some(result.clone());

        log::debug!(
            "round {}: {} vs {} -> {} ({}-{})",
            self.rounds_played,
            player_choice,
            computer_choice,
            result.outcome,
            self.score.player_score,
            self.score.computer_score
        );
        Some(result)
    }

    /// Presentation has shown the result; ready the next round.
    pub fn acknowledge_round(&mut self) {
        self.phase = RoundPhase::Idle;
        self.last_result = None;
    }

    /// Zero the scoreboard and discard any in-flight result.
    pub fn reset_game(&mut self) -> ScoreState {
        self.score.reset();
        self.phase = RoundPhase::Idle;
        self.last_result = None;
        self.rounds_played = 0;
        log::info!("game reset");
        self.score
    }

    #[must_use]
    pub const fn score(&self) -> ScoreState {
        self.score
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_round_in_progress(&self) -> bool {
        self.phase == RoundPhase::Resolving
    }

    /// Result awaiting acknowledgement, if any.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Rounds resolved since the last reset.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    #[must_use]
    pub const fn chooser(&self) -> &C {
        &self.chooser
    }

    /// Consume the session, returning its choice source.
    #[must_use]
    pub fn into_chooser(self) -> C {
        self.chooser
    }
}
