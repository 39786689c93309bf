use anyhow::{Result, bail};
use std::collections::HashSet;

/// Default seed when the CLI supplies none.
pub const DEFAULT_SEED: u64 = 1337;

/// Seed metadata used for logic and distribution runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed }
    }
}

/// Resolve a list of CLI seed arguments into canonical seeds.
///
/// Negative integers use their absolute value. Duplicates keep their first
/// position; an empty list yields [`DEFAULT_SEED`].
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        let seed = if let Ok(value) = token.parse::<i64>() {
            value.unsigned_abs()
        } else if let Ok(value) = token.parse::<u64>() {
            value
        } else {
            bail!("Unrecognized seed token: {token}");
        };
        if seen.insert(seed) {
            resolved.push(SeedInfo::from_numeric(seed));
        }
    }

    if resolved.is_empty() {
        resolved.push(SeedInfo::from_numeric(DEFAULT_SEED));
    }

    Ok(resolved)
}
