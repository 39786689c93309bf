//! Rock Paper Scissors Game Engine
//!
//! Platform-agnostic core game logic: the choice set and its beats-relation,
//! outcome resolution, the computer opponent, scoring and the round state
//! machine. This crate has no UI or platform-specific dependencies; a
//! presentation layer constructs a [`GameSession`] and renders what it returns.

pub mod choice;
pub mod chooser;
pub mod error;
pub mod numbers;
pub mod outcome;
pub mod round;
pub mod score;

// Re-export commonly used types
pub use choice::{Choice, RuleTable, list_choices};
pub use chooser::{ChoiceSource, CountingRng, RandomChooser, ScriptedChooser, pick_random};
pub use error::GameError;
pub use outcome::{Outcome, TIE_EXPLANATION, determine_outcome, explain};
pub use round::{GameSession, RoundPhase, RoundResult};
pub use score::{Leader, ScoreState};
