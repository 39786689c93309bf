use thiserror::Error;

/// Errors surfaced by the game core.
///
/// The only failure is an integration bug: a caller passing a choice name
/// outside the fixed choice set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid choice '{name}' (expected rock, paper or scissors)")]
    InvalidChoice { name: String },
}

impl GameError {
    #[must_use]
    pub fn invalid_choice(name: &str) -> Self {
        Self::InvalidChoice {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choice_message_names_input() {
        let err = GameError::invalid_choice("lizard");
        assert_eq!(
            err.to_string(),
            "invalid choice 'lizard' (expected rock, paper or scissors)"
        );
    }
}
