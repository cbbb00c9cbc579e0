//! Account allocation shares by age band

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::member::AgeBand;

/// Tolerance for the three shares summing to one
pub const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Fraction of a contribution credited to each account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationShares {
    pub medisave: f64,
    pub special: f64,
    pub ordinary: f64,
}

impl AllocationShares {
    pub const fn new(medisave: f64, special: f64, ordinary: f64) -> Self {
        Self { medisave, special, ordinary }
    }

    pub fn sum(&self) -> f64 {
        self.medisave + self.special + self.ordinary
    }

    fn validate(&self, band: AgeBand) -> Result<()> {
        let shares = [self.medisave, self.special, self.ordinary];
        if shares.iter().any(|s| !(0.0..=1.0).contains(s)) {
            return Err(Error::Configuration(format!("{band}: allocation share outside [0, 1]")));
        }
        if (self.sum() - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(Error::Configuration(format!(
                "{band}: allocation shares sum to {}, expected 1",
                self.sum()
            )));
        }
        Ok(())
    }
}

/// Allocation lookup, one entry per [`AgeBand`]
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationTable {
    shares: [AllocationShares; 7],
}

impl AllocationTable {
    /// 2024 allocation shares as fractions of the total contribution
    pub fn default_2024() -> Self {
        Self {
            shares: [
                AllocationShares::new(0.08108, 0.23243, 0.68649),
                AllocationShares::new(0.08108, 0.23243, 0.68649),
                AllocationShares::new(0.08108, 0.23243, 0.68649),
                AllocationShares::new(0.08108, 0.23243, 0.68649),
                AllocationShares::new(0.10577, 0.13462, 0.75961),
                AllocationShares::new(0.12121, 0.03030, 0.84849),
                AllocationShares::new(0.16000, 0.00000, 0.84000),
            ],
        }
    }

    /// Build from loaded rows; every band must appear exactly once
    pub fn from_loaded(rows: &[(AgeBand, AllocationShares)]) -> Result<Self> {
        let mut slots: [Option<AllocationShares>; 7] = [None; 7];
        for &(band, shares) in rows {
            shares.validate(band)?;
            if slots[band.index()].replace(shares).is_some() {
                return Err(Error::Configuration(format!("duplicate allocation shares for {band}")));
            }
        }

        let mut table = Self::default_2024();
        for band in AgeBand::ALL {
            table.shares[band.index()] = slots[band.index()]
                .ok_or_else(|| Error::Configuration(format!("no allocation shares for {band}")))?;
        }
        Ok(table)
    }

    pub fn get(&self, band: AgeBand) -> AllocationShares {
        self.shares[band.index()]
    }
}
