//! Scheme parameters: wage ceilings, account interest rates and retirement sums

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Monthly ceiling on ordinary wages subject to contribution
pub const MONTHLY_ORDINARY_WAGE_CEILING: f64 = 6000.00;

/// Annual ceiling on total (ordinary + additional) wages
pub const ANNUAL_WAGE_CEILING: f64 = 102000.00;

/// 2024 Basic Retirement Sum
pub const BASIC_RETIREMENT_SUM: f64 = 102000.0;

/// 2024 Full Retirement Sum
pub const FULL_RETIREMENT_SUM: f64 = 198800.0;

/// 2024 Enhanced Retirement Sum
pub const ENHANCED_RETIREMENT_SUM: f64 = 298800.0;

/// Wage ceilings applied by the contribution calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageCeilings {
    pub monthly_ordinary: f64,
    pub annual_total: f64,
}

impl Default for WageCeilings {
    fn default() -> Self {
        Self {
            monthly_ordinary: MONTHLY_ORDINARY_WAGE_CEILING,
            annual_total: ANNUAL_WAGE_CEILING,
        }
    }
}

/// Nominal annual interest rate per account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRates {
    pub oa: f64,
    pub sa: f64,
    pub ma: f64,
}

impl Default for InterestRates {
    /// Base rates: OA 2.5%, SA 4%, MA 4%
    fn default() -> Self {
        Self {
            oa: 0.025,
            sa: 0.04,
            ma: 0.04,
        }
    }
}

impl InterestRates {
    /// Build from (account, rate) rows; accounts are "OA", "SA" and "MA"
    pub fn from_loaded(rows: &[(String, f64)]) -> Result<Self> {
        let mut oa = None;
        let mut sa = None;
        let mut ma = None;

        for (account, rate) in rows {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(Error::Configuration(format!("{account}: invalid interest rate {rate}")));
            }
            let slot = match account.trim().to_ascii_uppercase().as_str() {
                "OA" => &mut oa,
                "SA" => &mut sa,
                "MA" => &mut ma,
                other => {
                    return Err(Error::Configuration(format!("unknown account in interest rates: {other}")))
                }
            };
            *slot = Some(*rate);
        }

        let missing = |name: &str| Error::Configuration(format!("no interest rate for {name}"));
        Ok(Self {
            oa: oa.ok_or_else(|| missing("OA"))?,
            sa: sa.ok_or_else(|| missing("SA"))?,
            ma: ma.ok_or_else(|| missing("MA"))?,
        })
    }
}

/// Retirement sum milestones for the Special Account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementSums {
    pub basic: f64,
    pub full: f64,
    pub enhanced: f64,
}

impl Default for RetirementSums {
    fn default() -> Self {
        Self {
            basic: BASIC_RETIREMENT_SUM,
            full: FULL_RETIREMENT_SUM,
            enhanced: ENHANCED_RETIREMENT_SUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_constants() {
        let ceilings = WageCeilings::default();
        assert_eq!(ceilings.monthly_ordinary, 6000.0);
        assert_eq!(ceilings.annual_total, 102000.0);

        let sums = RetirementSums::default();
        assert_eq!((sums.basic, sums.full, sums.enhanced), (102000.0, 198800.0, 298800.0));

        let rates = InterestRates::default();
        assert_eq!((rates.oa, rates.sa, rates.ma), (0.025, 0.04, 0.04));
    }

    #[test]
    fn test_interest_rates_from_rows() {
        let rows = vec![
            ("oa".to_string(), 0.025),
            ("SA".to_string(), 0.04),
            ("MA".to_string(), 0.04),
        ];
        assert_eq!(InterestRates::from_loaded(&rows).unwrap(), InterestRates::default());

        let missing = vec![("OA".to_string(), 0.025)];
        assert!(matches!(InterestRates::from_loaded(&missing), Err(Error::Configuration(_))));

        let unknown = vec![("RA".to_string(), 0.04)];
        assert!(InterestRates::from_loaded(&unknown).is_err());
    }
}
