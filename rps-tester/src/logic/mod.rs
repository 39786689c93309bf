pub mod distribution;
pub mod reports;
pub mod seeds;
pub mod tester;

pub use distribution::{CHI_SQUARE_LIMIT, DistributionRecord, run_distribution_analysis};
pub use seeds::resolve_seed_inputs;
pub use tester::*;
