use anyhow::{Context, Result, ensure};
use rps_game::{Choice, GameSession, Outcome, RoundPhase, ScoreState};

pub fn score_tracking_check(seed: u64, rounds: usize) -> Result<()> {
    let mut session = GameSession::seeded(seed);
    let mut expected = ScoreState::new();
    let mut ties = 0_u64;

    for i in 0..rounds {
        let player = Choice::ALL[(i * 7 + 1) % Choice::ALL.len()];
        let result = session
            .start_round_with(player)
            .with_context(|| format!("round {} was ignored from idle", i + 1))?;
        match result.outcome {
            Outcome::Win => expected.player_score += 1,
            Outcome::Lose => expected.computer_score += 1,
            Outcome::Tie => ties += 1,
        }
        ensure!(
            session.score() == expected,
            "after round {} score is {:?}, expected {expected:?}",
            i + 1,
            session.score()
        );
        session.acknowledge_round();
    }

    ensure!(
        expected.decided() + ties == session.rounds_played(),
        "wins, losses and ties do not add up to rounds played"
    );
    Ok(())
}

pub fn double_submit_check(seed: u64, _rounds: usize) -> Result<()> {
    let mut session = GameSession::seeded(seed);
    let first = session
        .start_round_with(Choice::Rock)
        .context("first start was ignored")?;
    let score = session.score();
    let draws = session.chooser().draws();

    for choice in Choice::ALL {
        ensure!(
            session.start_round_with(choice).is_none(),
            "start with {choice} while resolving was accepted"
        );
    }
    ensure!(
        session.start_round("paper")?.is_none(),
        "named start while resolving was accepted"
    );
    ensure!(session.score() == score, "ignored starts changed the score");
    ensure!(
        session.chooser().draws() == draws,
        "ignored starts consumed entropy"
    );
    ensure!(
        session.last_result() == Some(&first),
        "ignored starts replaced the round result"
    );
    ensure!(session.rounds_played() == 1, "ignored starts were counted");
    Ok(())
}

pub fn reset_check(seed: u64, rounds: usize) -> Result<()> {
    let mut session = GameSession::seeded(seed);
    for i in 0..rounds.max(1) {
        let _ = session.start_round_with(Choice::ALL[i % Choice::ALL.len()]);
        session.acknowledge_round();
    }
    let _ = session.start_round_with(Choice::Scissors);

    let fresh = session.reset_game();
    ensure!(fresh.is_zero(), "reset returned {fresh:?}");
    ensure!(session.score().is_zero(), "score survived reset");
    ensure!(
        session.phase() == RoundPhase::Idle,
        "reset left the session {:?}",
        session.phase()
    );
    ensure!(session.last_result().is_none(), "round survived reset");
    ensure!(
        session.start_round_with(Choice::Paper).is_some(),
        "session did not accept a round after reset"
    );
    Ok(())
}
