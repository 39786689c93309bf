use rps_game::Choice;

/// Shortcut summary logged when the page starts.
pub const KEYBOARD_HELP: &str =
    "Keyboard shortcuts: R (Rock), P (Paper), S (Scissors), ESC (Dismiss result)";

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Play(Choice),
    /// Dismiss the shown result and ready the next round.
    Acknowledge,
}

// Maps KeyboardEvent.key to a global shortcut: r/p/s play, Escape dismisses.
#[must_use]
pub fn key_to_command(key: &str) -> Option<KeyCommand> {
    match key {
        "r" | "R" => Some(KeyCommand::Play(Choice::Rock)),
        "p" | "P" => Some(KeyCommand::Play(Choice::Paper)),
        "s" | "S" => Some(KeyCommand::Play(Choice::Scissors)),
        "Escape" | "Esc" => Some(KeyCommand::Acknowledge),
        _ => None,
    }
}

// Keys that activate a focused choice button.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn letter_shortcuts_map_to_choices() {
        assert_eq!(key_to_command("r"), Some(KeyCommand::Play(Choice::Rock)));
        assert_eq!(key_to_command("P"), Some(KeyCommand::Play(Choice::Paper)));
        assert_eq!(
            key_to_command("s"),
            Some(KeyCommand::Play(Choice::Scissors))
        );
        assert_eq!(key_to_command("x"), None);
        assert_eq!(key_to_command("rock"), None);
    }

    #[test]
    fn escape_acknowledges() {
        assert_eq!(key_to_command("Escape"), Some(KeyCommand::Acknowledge));
        assert_eq!(key_to_command("Esc"), Some(KeyCommand::Acknowledge));
    }

    #[test]
    fn help_lists_every_shortcut() {
        for key in ["R (Rock)", "P (Paper)", "S (Scissors)", "ESC (Dismiss result)"] {
            assert!(KEYBOARD_HELP.contains(key), "missing {key}");
        }
        assert_eq!(key_to_command("Escape"), Some(KeyCommand::Acknowledge));
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
