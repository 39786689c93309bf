use rps_game::numbers::u64_to_f64;
use rps_game::{ChoiceSource, RandomChooser};
use serde::{Deserialize, Serialize};

/// Chi-square critical value for 2 degrees of freedom at p = 0.001.
pub const CHI_SQUARE_LIMIT: f64 = 13.82;

/// Computer choice frequencies drawn from one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub seed: u64,
    pub rounds: u64,
    pub rock: u64,
    pub paper: u64,
    pub scissors: u64,
    pub chi_square: f64,
    pub passed: bool,
}

impl DistributionRecord {
    #[must_use]
    pub const fn counts(&self) -> [u64; 3] {
        [self.rock, self.paper, self.scissors]
    }
}

/// Pearson's chi-square against the uniform distribution over the counts.
#[must_use]
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 || counts.is_empty() {
        return 0.0;
    }
    let expected = u64_to_f64(total) / u64_to_f64(u64::try_from(counts.len()).unwrap_or(u64::MAX));
    counts
        .iter()
        .map(|&observed| {
            let delta = u64_to_f64(observed) - expected;
            delta * delta / expected
        })
        .sum()
}

/// Draw `rounds` computer choices from a chooser seeded with `seed`.
#[must_use]
pub fn measure_distribution(seed: u64, rounds: usize) -> DistributionRecord {
    let mut chooser = RandomChooser::from_seed(seed);
    let mut counts = [0_u64; 3];
    for _ in 0..rounds {
        counts[chooser.pick().index()] += 1;
    }
    let chi_square = chi_square(&counts);
    log::debug!("seed {seed}: counts {counts:?} chi-square {chi_square:.3}");
    DistributionRecord {
        seed,
        rounds: u64::try_from(rounds).unwrap_or(u64::MAX),
        rock: counts[0],
        paper: counts[1],
        scissors: counts[2],
        chi_square,
        passed: chi_square <= CHI_SQUARE_LIMIT,
    }
}

pub fn run_distribution_analysis(seeds: &[u64], rounds: usize) -> Vec<DistributionRecord> {
    seeds
        .iter()
        .map(|&seed| measure_distribution(seed, rounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_counts_score_zero() {
        assert!(chi_square(&[100, 100, 100]).abs() < f64::EPSILON);
        assert!(chi_square(&[0, 0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn skewed_counts_exceed_limit() {
        // expected 100 each: (200-100)^2/100 + 2 * (50-100)^2/100 = 150
        let stat = chi_square(&[200, 50, 50]);
        assert!((stat - 150.0).abs() < 1e-9);
        assert!(stat > CHI_SQUARE_LIMIT);
    }

    #[test]
    fn measured_counts_cover_every_round() {
        let record = measure_distribution(7, 3000);
        assert_eq!(record.counts().iter().sum::<u64>(), 3000);
        assert_eq!(record.rounds, 3000);
        assert_eq!(record, measure_distribution(7, 3000));
    }

    #[test]
    fn analysis_returns_one_record_per_seed() {
        let records = run_distribution_analysis(&[1, 2, 3], 600);
        assert_eq!(
            records.iter().map(|r| r.seed).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
