use anyhow::Result;

pub mod rules;
pub mod session;
pub mod smoke;

/// A scenario check runs one iteration against a fresh session seeded with
/// `seed`, playing up to `rounds` rounds.
pub type ScenarioCheck = fn(seed: u64, rounds: usize) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    check: ScenarioCheck,
}

impl TestScenario {
    const fn new(name: &'static str, description: &'static str, check: ScenarioCheck) -> Self {
        Self {
            name,
            description,
            check,
        }
    }

    /// # Errors
    ///
    /// Returns the first expectation the iteration violated.
    pub fn run(&self, seed: u64, rounds: usize) -> Result<()> {
        (self.check)(seed, rounds)
    }
}

const CATALOG: &[TestScenario] = &[
    TestScenario::new(
        "smoke",
        "Play a seeded session round after round and check the counters",
        smoke::smoke_check,
    ),
    TestScenario::new(
        "rule-table",
        "Validate the beats-relation and all nine outcome pairs",
        rules::rule_table_check,
    ),
    TestScenario::new(
        "fairness",
        "Chi-square test of the computer's choice distribution",
        rules::fairness_check,
    ),
    TestScenario::new(
        "score-tracking",
        "Scores match the outcomes of every resolved round",
        session::score_tracking_check,
    ),
    TestScenario::new(
        "double-submit",
        "A second start while resolving is ignored and draws no entropy",
        session::double_submit_check,
    ),
    TestScenario::new(
        "reset",
        "Reset mid-round zeroes scores and returns to idle",
        session::reset_check,
    ),
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    CATALOG.iter().find(|s| s.name == name).copied()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.name, s.description)).collect()
}

/// Replace `all` with every catalogued scenario, keeping the other names.
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    let mut scenarios: Vec<String> = names.iter().filter(|s| *s != "all").cloned().collect();
    if names.iter().any(|s| s == "all") {
        for scenario in CATALOG {
            if !scenarios.iter().any(|s| s == scenario.name) {
                scenarios.push(scenario.name.to_string());
            }
        }
    }
    scenarios
}
