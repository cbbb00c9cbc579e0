//! Scheme assumptions: contribution rates, allocation shares, ceilings and interest rates

mod allocation;
mod rates;
mod schemes;
pub mod loader;

pub use allocation::{AllocationShares, AllocationTable, SHARE_SUM_TOLERANCE};
pub use loader::LoadedAssumptions;
pub use rates::{ContributionRateTable, ContributionRates};
pub use schemes::{
    InterestRates, RetirementSums, WageCeilings, ANNUAL_WAGE_CEILING, BASIC_RETIREMENT_SUM,
    ENHANCED_RETIREMENT_SUM, FULL_RETIREMENT_SUM, MONTHLY_ORDINARY_WAGE_CEILING,
};

use std::path::Path;

use crate::error::Result;

/// Container for all calculation assumptions
///
/// Built once and shared read-only by the calculator, splitter and engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub contribution: ContributionRateTable,
    pub allocation: AllocationTable,
    pub interest: InterestRates,
    pub ceilings: WageCeilings,
    pub retirement_sums: RetirementSums,
}

impl Assumptions {
    /// Create assumptions with the published 2024 values
    pub fn default_2024() -> Self {
        Self {
            contribution: ContributionRateTable::default_2024(),
            allocation: AllocationTable::default_2024(),
            interest: InterestRates::default(),
            ceilings: WageCeilings::default(),
            retirement_sums: RetirementSums::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Ceilings and retirement sums keep their published values.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            contribution: ContributionRateTable::from_loaded(&loaded.contribution_rates)?,
            allocation: AllocationTable::from_loaded(&loaded.allocation_rates)?,
            interest: InterestRates::from_loaded(&loaded.interest_rates)?,
            ceilings: WageCeilings::default(),
            retirement_sums: RetirementSums::default(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_2024()
    }
}
