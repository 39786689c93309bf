use anyhow::{Context, Result, ensure};
use rps_game::{Choice, GameSession, RoundPhase};

pub fn smoke_check(seed: u64, rounds: usize) -> Result<()> {
    let mut session = GameSession::seeded(seed);
    for i in 0..rounds {
        let player = Choice::ALL[i % Choice::ALL.len()];
        let result = session
            .start_round(player.name())?
            .with_context(|| format!("round {} was ignored from idle", i + 1))?;
        ensure!(
            result.player_choice == player,
            "round {} recorded {:?} instead of {player:?}",
            i + 1,
            result.player_choice
        );
        ensure!(
            session.phase() == RoundPhase::Resolving,
            "session should be resolving after a start"
        );
        session.acknowledge_round();
    }

    let played = u64::try_from(rounds).unwrap_or(u64::MAX);
    ensure!(
        session.rounds_played() == played,
        "expected {played} rounds played, counted {}",
        session.rounds_played()
    );
    ensure!(
        session.score().decided() <= played,
        "more decided rounds ({}) than rounds played ({played})",
        session.score().decided()
    );
    ensure!(
        session.chooser().draws() == played,
        "computer drew {} times for {played} rounds",
        session.chooser().draws()
    );
    Ok(())
}
