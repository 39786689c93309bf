//! Staged reveal of a resolved round.
//!
//! The core resolves a round synchronously; the page then shows both choices
//! after one delay and the outcome after a second. Each step is scheduled as
//! its own cancellable timeout by the app.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest delay accepted for either reveal step.
pub const MAX_DELAY_MS: u32 = 10_000;

/// How much of the current round is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealStage {
    #[default]
    Hidden,
    ChoicesShown,
    ResultShown,
}

impl RevealStage {
    /// Next stage; `ResultShown` is terminal.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Hidden => Self::ChoicesShown,
            Self::ChoicesShown | Self::ResultShown => Self::ResultShown,
        }
    }

    #[must_use]
    pub const fn shows_choices(self) -> bool {
        matches!(self, Self::ChoicesShown | Self::ResultShown)
    }

    #[must_use]
    pub const fn shows_result(self) -> bool {
        matches!(self, Self::ResultShown)
    }
}

#[derive(Debug, Error)]
pub enum RevealConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be at most {max} ms (got {value})")]
    DelayTooLong {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Reveal timing, loaded from `static/assets/data/reveal.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "RevealConfig::default_choice_delay_ms")]
    pub choice_delay_ms: u32,
    #[serde(default = "RevealConfig::default_result_delay_ms")]
    pub result_delay_ms: u32,
}

impl RevealConfig {
    const fn default_choice_delay_ms() -> u32 {
        600
    }

    const fn default_result_delay_ms() -> u32 {
        300
    }

    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            choice_delay_ms: Self::default_choice_delay_ms(),
            result_delay_ms: Self::default_result_delay_ms(),
        }
    }

    /// Parse and validate reveal timing.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a delay exceeds
    /// [`MAX_DELAY_MS`].
    pub fn from_json(json: &str) -> Result<Self, RevealConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Embedded timing, falling back to defaults if the asset is invalid.
    #[must_use]
    pub fn load_from_static() -> Self {
        let json = include_str!("../static/assets/data/reveal.json");
        Self::from_json(json).unwrap_or_else(|err| {
            log::error!("Failed to load reveal config: {err}");
            Self::default_config()
        })
    }

    /// # Errors
    ///
    /// Returns [`RevealConfigError::DelayTooLong`] for the first delay over
    /// [`MAX_DELAY_MS`].
    pub fn validate(&self) -> Result<(), RevealConfigError> {
        if self.choice_delay_ms > MAX_DELAY_MS {
            return Err(RevealConfigError::DelayTooLong {
                field: "choice_delay_ms",
                value: self.choice_delay_ms,
                max: MAX_DELAY_MS,
            });
        }
        if self.result_delay_ms > MAX_DELAY_MS {
            return Err(RevealConfigError::DelayTooLong {
                field: "result_delay_ms",
                value: self.result_delay_ms,
                max: MAX_DELAY_MS,
            });
        }
        Ok(())
    }

    /// The two steps to schedule once a round has resolved.
    #[must_use]
    pub const fn plan(&self) -> RevealPlan {
        RevealPlan {
            choices: RevealStep {
                stage: RevealStage::ChoicesShown,
                at_ms: self.choice_delay_ms,
            },
            result: RevealStep {
                stage: RevealStage::ResultShown,
                at_ms: self.choice_delay_ms.saturating_add(self.result_delay_ms),
            },
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// One scheduled reveal, measured from the moment the round resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub stage: RevealStage,
    pub at_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    pub choices: RevealStep,
    pub result: RevealStep,
}

impl RevealPlan {
    #[must_use]
    pub const fn steps(&self) -> [RevealStep; 2] {
        [self.choices, self.result]
    }
}
