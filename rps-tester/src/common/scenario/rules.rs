use anyhow::{Result, anyhow, ensure};
use rps_game::{Choice, Outcome, RuleTable, determine_outcome, explain};

use crate::logic::distribution::measure_distribution;

pub fn rule_table_check(_seed: u64, _rounds: usize) -> Result<()> {
    check_table(&RuleTable::standard())
}

/// Cross-check `determine_outcome` against an explicit beats table.
fn check_table(table: &RuleTable) -> Result<()> {
    table.validate().map_err(|err| anyhow!(err))?;

    for player in Choice::ALL {
        for computer in Choice::ALL {
            let outcome = determine_outcome(player, computer);
            let expected = match table.winner_of(player, computer) {
                None => Outcome::Tie,
                Some(winner) if winner == player => Outcome::Win,
                Some(_) => Outcome::Lose,
            };
            ensure!(
                outcome == expected,
                "{player} vs {computer}: got {outcome:?}, table says {expected:?}"
            );
            ensure!(
                determine_outcome(computer, player) == outcome.inverse(),
                "{player} vs {computer} is not antisymmetric"
            );
            ensure!(
                !explain(player, computer, outcome).is_empty(),
                "{player} vs {computer} has no explanation"
            );
        }
    }
    Ok(())
}

pub fn fairness_check(seed: u64, rounds: usize) -> Result<()> {
    let record = measure_distribution(seed, rounds);
    ensure!(
        record.passed,
        "seed {seed}: chi-square {:.3} over {} draws exceeds limit (rock {}, paper {}, scissors {})",
        record.chi_square,
        record.rounds,
        record.rock,
        record.paper,
        record.scissors
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_outcomes() {
        rule_table_check(0, 0).unwrap();
    }

    #[test]
    fn reversed_cycle_is_caught() {
        let reversed = RuleTable::from_entries(vec![
            (Choice::Rock, Choice::Paper),
            (Choice::Paper, Choice::Scissors),
            (Choice::Scissors, Choice::Rock),
        ]);
        assert_eq!(reversed.validate(), Ok(()));
        let err = check_table(&reversed).unwrap_err();
        assert!(err.to_string().contains("table says"));
    }
}
