//! Contribution rates by age band

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::member::AgeBand;

/// Tolerance for `employee + employer == total`
const RATE_SUM_TOLERANCE: f64 = 1e-9;

/// Total, employee and employer contribution rates as fractions of wages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionRates {
    pub total: f64,
    pub employee: f64,
    pub employer: f64,
}

impl ContributionRates {
    pub const fn new(total: f64, employee: f64, employer: f64) -> Self {
        Self { total, employee, employer }
    }

    fn validate(&self, band: AgeBand) -> Result<()> {
        for (name, rate) in [("total", self.total), ("employee", self.employee), ("employer", self.employer)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::Configuration(format!(
                    "{band}: {name} rate {rate} is outside [0, 1]"
                )));
            }
        }
        if (self.employee + self.employer - self.total).abs() > RATE_SUM_TOLERANCE {
            return Err(Error::Configuration(format!(
                "{band}: employee {} + employer {} does not equal total {}",
                self.employee, self.employer, self.total
            )));
        }
        Ok(())
    }
}

/// Contribution rate lookup, one entry per [`AgeBand`]
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRateTable {
    rates: [ContributionRates; 7],
}

impl ContributionRateTable {
    /// Rates effective from 1 January 2024 for citizens and third-year PRs
    pub fn default_2024() -> Self {
        Self {
            rates: [
                ContributionRates::new(0.37, 0.20, 0.17),   // 35 and below
                ContributionRates::new(0.37, 0.20, 0.17),   // 35 to 45
                ContributionRates::new(0.37, 0.20, 0.17),   // 45 to 50
                ContributionRates::new(0.37, 0.20, 0.17),   // 50 to 55
                ContributionRates::new(0.26, 0.13, 0.13),   // 55 to 60
                ContributionRates::new(0.165, 0.085, 0.08), // 60 to 65
                ContributionRates::new(0.125, 0.075, 0.05), // above 65
            ],
        }
    }

    /// Build from loaded rows; every band must appear exactly once
    pub fn from_loaded(rows: &[(AgeBand, ContributionRates)]) -> Result<Self> {
        let mut slots: [Option<ContributionRates>; 7] = [None; 7];
        for &(band, rates) in rows {
            rates.validate(band)?;
            if slots[band.index()].replace(rates).is_some() {
                return Err(Error::Configuration(format!("duplicate contribution rates for {band}")));
            }
        }

        let mut table = Self::default_2024();
        for band in AgeBand::ALL {
            table.rates[band.index()] = slots[band.index()]
                .ok_or_else(|| Error::Configuration(format!("no contribution rates for {band}")))?;
        }
        Ok(table)
    }

    /// Rates for a band
    pub fn get(&self, band: AgeBand) -> ContributionRates {
        self.rates[band.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_total() {
        let table = ContributionRateTable::default_2024();
        for band in AgeBand::ALL {
            let r = table.get(band);
            assert!((r.employee + r.employer - r.total).abs() < 1e-12, "{band}");
        }
    }

    #[test]
    fn test_published_rates() {
        let table = ContributionRateTable::default_2024();
        assert_eq!(table.get(AgeBand::UpTo35), ContributionRates::new(0.37, 0.20, 0.17));
        assert_eq!(table.get(AgeBand::Above55To60).total, 0.26);
        assert_eq!(table.get(AgeBand::Above60To65).employee, 0.085);
        assert_eq!(table.get(AgeBand::Above65).employer, 0.05);
    }

    #[test]
    fn test_missing_band_is_configuration_error() {
        let rows: Vec<_> = AgeBand::ALL[..6]
            .iter()
            .map(|&b| (b, ContributionRates::new(0.37, 0.20, 0.17)))
            .collect();
        let err = ContributionRateTable::from_loaded(&rows).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_inconsistent_rates_rejected() {
        let rows: Vec<_> = AgeBand::ALL
            .iter()
            .map(|&b| (b, ContributionRates::new(0.37, 0.20, 0.15)))
            .collect();
        assert!(ContributionRateTable::from_loaded(&rows).is_err());
    }

    #[test]
    fn test_duplicate_band_rejected() {
        let mut rows: Vec<_> = AgeBand::ALL
            .iter()
            .map(|&b| (b, ContributionRates::new(0.37, 0.20, 0.17)))
            .collect();
        rows.push((AgeBand::Above65, ContributionRates::new(0.125, 0.075, 0.05)));
        assert!(ContributionRateTable::from_loaded(&rows).is_err());
    }
}
