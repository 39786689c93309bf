use rps_game::{
    Choice, GameError, GameSession, Outcome, RoundPhase, ScoreState, ScriptedChooser,
    TIE_EXPLANATION,
};

fn session_against(script: &[Choice]) -> GameSession<ScriptedChooser> {
    GameSession::new(ScriptedChooser::new(script.iter().copied()))
}

#[test]
fn rock_against_scissors_wins() {
    let mut session = session_against(&[Choice::Scissors]);
    let result = session.start_round("rock").unwrap().expect("idle session");

    assert_eq!(result.player_choice, Choice::Rock);
    assert_eq!(result.computer_choice, Choice::Scissors);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.explanation, "Rock crushes Scissors");
    assert_eq!(result.message(), "You Win! 🎉");
    assert_eq!(
        session.score(),
        ScoreState {
            player_score: 1,
            computer_score: 0
        }
    );
}

#[test]
fn paper_against_paper_ties() {
    let mut session = session_against(&[Choice::Paper]);
    let result = session.start_round("paper").unwrap().expect("idle session");

    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.explanation, TIE_EXPLANATION);
    assert_eq!(result.explanation, "Both players chose the same!");
    assert!(session.score().is_zero());
}

#[test]
fn losing_round_credits_computer() {
    let mut session = session_against(&[Choice::Rock]);
    let result = session.start_round("scissors").unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.explanation, "Rock crushes Scissors");
    assert_eq!(session.score().computer_score, 1);
    assert_eq!(session.score().player_score, 0);
}

#[test]
fn double_start_matches_single_start() {
    let mut once = session_against(&[Choice::Paper, Choice::Scissors]);
    let mut twice = session_against(&[Choice::Paper, Choice::Scissors]);

    let single = once.start_round("rock").unwrap();
    let first = twice.start_round("rock").unwrap();
    let repeat = twice.start_round("scissors").unwrap();

    assert_eq!(single, first);
    assert!(repeat.is_none());
    assert_eq!(once.score(), twice.score());
    assert_eq!(once.phase(), twice.phase());
    assert_eq!(once.last_result(), twice.last_result());
    assert_eq!(once.rounds_played(), twice.rounds_played());
}

#[test]
fn invalid_choice_is_reported_not_defaulted() {
    let mut session = session_against(&[Choice::Rock]);
    assert_eq!(
        session.start_round("lizard"),
        Err(GameError::InvalidChoice {
            name: "lizard".to_string()
        })
    );
    assert_eq!(session.phase(), RoundPhase::Idle);
}

#[test]
fn reset_after_any_sequence_returns_to_zero_and_idle() {
    let mut session = GameSession::seeded(0xC0FFEE);
    for (i, choice) in Choice::ALL.iter().cycle().take(25).enumerate() {
        session.start_round_with(*choice);
        if i % 3 != 0 {
            session.acknowledge_round();
        }
    }
    assert!(session.rounds_played() > 0);

    let fresh = session.reset_game();
    assert_eq!(fresh, ScoreState::default());
    assert_eq!(session.score(), ScoreState::default());
    assert_eq!(session.phase(), RoundPhase::Idle);
    assert!(session.last_result().is_none());
}

#[test]
fn scores_track_outcomes_over_many_rounds() {
    let mut session = GameSession::seeded(7);
    let mut expected = ScoreState::default();
    for choice in Choice::ALL.iter().cycle().take(300) {
        let result = session.start_round_with(*choice).expect("idle");
        expected.apply_outcome(result.outcome);
        session.acknowledge_round();
    }
    assert_eq!(session.score(), expected);
    assert_eq!(session.rounds_played(), 300);
    assert!(session.score().decided() <= 300);
}

#[test]
fn round_result_serializes_with_lowercase_names() {
    let mut session = session_against(&[Choice::Rock]);
    let result = session.start_round("paper").unwrap().unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["player_choice"], "paper");
    assert_eq!(json["computer_choice"], "rock");
    assert_eq!(json["outcome"], "win");
    assert_eq!(json["explanation"], "Paper covers Rock");
}
