//! CSV-based assumption loader
//!
//! Loads rate tables from CSV files in data/assumptions/

use std::path::Path;

use serde::Deserialize;

use super::{AllocationShares, ContributionRates};
use crate::error::Result;
use crate::member::AgeBand;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

#[derive(Debug, Deserialize)]
struct ContributionRow {
    #[serde(rename = "Band")]
    band: AgeBand,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "Employee")]
    employee: f64,
    #[serde(rename = "Employer")]
    employer: f64,
}

#[derive(Debug, Deserialize)]
struct AllocationRow {
    #[serde(rename = "Band")]
    band: AgeBand,
    #[serde(rename = "MediSave")]
    medisave: f64,
    #[serde(rename = "Special")]
    special: f64,
    #[serde(rename = "Ordinary")]
    ordinary: f64,
}

#[derive(Debug, Deserialize)]
struct InterestRow {
    #[serde(rename = "Account")]
    account: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Load contribution rates from CSV
/// Returns one (band, rates) pair per row in file order
pub fn load_contribution_rates(path: &Path) -> Result<Vec<(AgeBand, ContributionRates)>> {
    let mut reader = csv::Reader::from_path(path.join("contribution_rates.csv"))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ContributionRow = result?;
        rows.push((row.band, ContributionRates::new(row.total, row.employee, row.employer)));
    }

    Ok(rows)
}

/// Load account allocation shares from CSV
pub fn load_allocation_rates(path: &Path) -> Result<Vec<(AgeBand, AllocationShares)>> {
    let mut reader = csv::Reader::from_path(path.join("allocation_rates.csv"))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: AllocationRow = result?;
        rows.push((row.band, AllocationShares::new(row.medisave, row.special, row.ordinary)));
    }

    Ok(rows)
}

/// Load account interest rates from CSV
/// Returns Vec<(account, annual_rate)>
pub fn load_interest_rates(path: &Path) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::Reader::from_path(path.join("interest_rates.csv"))?;

    let mut rates = Vec::new();
    for result in reader.deserialize() {
        let row: InterestRow = result?;
        rates.push((row.account, row.rate));
    }

    Ok(rates)
}

/// Raw rows from all assumption files
pub struct LoadedAssumptions {
    pub contribution_rates: Vec<(AgeBand, ContributionRates)>,
    pub allocation_rates: Vec<(AgeBand, AllocationShares)>,
    pub interest_rates: Vec<(String, f64)>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let loaded = Self {
            contribution_rates: load_contribution_rates(path)?,
            allocation_rates: load_allocation_rates(path)?,
            interest_rates: load_interest_rates(path)?,
        };
        log::info!(
            "loaded assumptions from {}: {} rate rows, {} allocation rows",
            path.display(),
            loaded.contribution_rates.len(),
            loaded.allocation_rates.len()
        );
        Ok(loaded)
    }
}
