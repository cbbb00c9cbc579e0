//! Member inputs: wages for a contribution month and current account balances

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};

/// Wages subject to contribution for a single month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WageInput {
    /// Monthly ordinary wages
    pub ordinary_wages: f64,
    /// Additional wages (bonus, etc.) paid this month
    pub additional_wages: f64,
    /// Total wages already paid this calendar year
    pub ytd_wages: f64,
}

impl WageInput {
    /// Build a validated wage input; all amounts must be finite and non-negative
    pub fn new(ordinary_wages: f64, additional_wages: f64, ytd_wages: f64) -> Result<Self> {
        ensure_non_negative("ordinary wages", ordinary_wages)?;
        ensure_non_negative("additional wages", additional_wages)?;
        ensure_non_negative("year-to-date wages", ytd_wages)?;
        Ok(Self {
            ordinary_wages,
            additional_wages,
            ytd_wages,
        })
    }
}

/// Balances of the three CPF accounts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountBalances {
    /// Ordinary Account
    pub oa: f64,
    /// Special Account
    pub sa: f64,
    /// MediSave Account
    pub ma: f64,
}

impl AccountBalances {
    pub fn new(oa: f64, sa: f64, ma: f64) -> Result<Self> {
        ensure_non_negative("OA balance", oa)?;
        ensure_non_negative("SA balance", sa)?;
        ensure_non_negative("MA balance", ma)?;
        Ok(Self { oa, sa, ma })
    }

    pub fn total(&self) -> f64 {
        self.oa + self.sa + self.ma
    }
}

/// A member record as used by batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: u32,
    pub birth_date: NaiveDate,
    pub wages: WageInput,
    pub balances: AccountBalances,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_wage_input_validation() {
        assert!(WageInput::new(6000.0, 0.0, 0.0).is_ok());
        assert!(matches!(WageInput::new(-1.0, 0.0, 0.0), Err(Error::InvalidInput(_))));
        assert!(matches!(WageInput::new(0.0, -1.0, 0.0), Err(Error::InvalidInput(_))));
        assert!(matches!(WageInput::new(0.0, 0.0, f64::NAN), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_balances_total() {
        let balances = AccountBalances::new(1000.0, 2000.0, 500.0).unwrap();
        assert_eq!(balances.total(), 3500.0);
        assert!(AccountBalances::new(0.0, -0.01, 0.0).is_err());
    }
}
