//! Contribution calculation and account allocation

mod allocation;
mod calculator;
mod money;

pub use allocation::{AllocationResult, AllocationSplitter};
pub use calculator::{ContributionCalculator, ContributionResult};
pub use money::round_cents;
