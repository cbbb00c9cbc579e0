//! Time-to-target estimates for the retirement sum milestones
//!
//! Inverts the future value of a level monthly annuity to find how long the
//! Special Account takes to close the gap to a target balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assumptions::Assumptions;
use crate::member::{AccountBalances, AgeBand};

/// Estimates beyond this horizon are reported as unreachable
pub const MAX_MILESTONE_YEARS: f64 = 100.0;

/// Outcome of a milestone estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MilestoneEstimate {
    /// Current balance already meets the target
    AlreadyAchieved,
    /// No contribution, or the estimate falls outside [0, 100] years
    Unreachable,
    /// Years to reach the target, rounded to one decimal
    EstimatedYears(f64),
}

impl MilestoneEstimate {
    pub fn years(&self) -> Option<f64> {
        match self {
            MilestoneEstimate::EstimatedYears(years) => Some(*years),
            _ => None,
        }
    }
}

impl fmt::Display for MilestoneEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneEstimate::AlreadyAchieved => f.write_str("Already achieved"),
            MilestoneEstimate::Unreachable => f.write_str("Cannot be achieved with current contribution"),
            MilestoneEstimate::EstimatedYears(years) => {
                write!(f, "Will reach in approximately {years:.1} years")
            }
        }
    }
}

/// Estimate years until `current` grows to `target`
///
/// Solves `remaining = PMT * ((1 + i)^n - 1) / i` for `n` monthly periods,
/// with `i = annual_rate / 12`. Any non-finite or out-of-range result maps
/// to [`MilestoneEstimate::Unreachable`].
pub fn years_to_target(
    target: f64,
    current: f64,
    monthly_contribution: f64,
    annual_rate: f64,
) -> MilestoneEstimate {
    if current >= target {
        return MilestoneEstimate::AlreadyAchieved;
    }
    if !(monthly_contribution > 0.0) {
        return MilestoneEstimate::Unreachable;
    }

    let remaining = target - current;
    let monthly_rate = annual_rate / 12.0;

    let n_months = if monthly_rate == 0.0 {
        remaining / monthly_contribution
    } else {
        let growth = 1.0 + (remaining * monthly_rate) / monthly_contribution;
        let per_period = 1.0 + monthly_rate;
        if !(growth > 0.0) || !(per_period > 0.0) || per_period == 1.0 {
            return MilestoneEstimate::Unreachable;
        }
        growth.ln() / per_period.ln()
    };

    let years = n_months / 12.0;
    if !years.is_finite() || !(0.0..=MAX_MILESTONE_YEARS).contains(&years) {
        return MilestoneEstimate::Unreachable;
    }

    MilestoneEstimate::EstimatedYears((years * 10.0).round() / 10.0)
}

/// Estimates for each retirement sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneReport {
    pub basic: MilestoneEstimate,
    pub full: MilestoneEstimate,
    pub enhanced: MilestoneEstimate,
}

/// Estimate each retirement sum from the Special Account balance
///
/// The Special Account receives the band's special share of
/// `monthly_total_contribution` and earns the SA rate.
pub fn calculate_milestones(
    assumptions: &Assumptions,
    balances: &AccountBalances,
    monthly_total_contribution: f64,
    band: AgeBand,
) -> MilestoneReport {
    let monthly_special = monthly_total_contribution * assumptions.allocation.get(band).special;
    let sa_rate = assumptions.interest.sa;
    let sums = &assumptions.retirement_sums;

    let estimate = |target: f64| years_to_target(target, balances.sa, monthly_special, sa_rate);
    MilestoneReport {
        basic: estimate(sums.basic),
        full: estimate(sums.full),
        enhanced: estimate(sums.enhanced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_achieved() {
        assert_eq!(years_to_target(198800.0, 200000.0, 500.0, 0.04), MilestoneEstimate::AlreadyAchieved);
        assert_eq!(years_to_target(102000.0, 102000.0, 0.0, 0.04), MilestoneEstimate::AlreadyAchieved);
    }

    #[test]
    fn test_no_contribution_is_unreachable() {
        for target in [102000.0, 198800.0, 298800.0] {
            assert_eq!(years_to_target(target, 1000.0, 0.0, 0.04), MilestoneEstimate::Unreachable);
            assert_eq!(years_to_target(target, 1000.0, -10.0, 0.04), MilestoneEstimate::Unreachable);
        }
        assert_eq!(years_to_target(102000.0, 0.0, f64::NAN, 0.04), MilestoneEstimate::Unreachable);
    }

    #[test]
    fn test_closed_form_estimate() {
        // ln(1 + 102000 * 0.04/12 / 516) / ln(1 + 0.04/12) = 152.1 months
        assert_eq!(years_to_target(102000.0, 0.0, 516.0, 0.04), MilestoneEstimate::EstimatedYears(12.7));
        assert_eq!(years_to_target(198800.0, 50000.0, 516.0, 0.04), MilestoneEstimate::EstimatedYears(16.9));
    }

    #[test]
    fn test_beyond_horizon_is_unreachable() {
        // ~261 years at one cent a month
        assert_eq!(years_to_target(102000.0, 0.0, 0.01, 0.04), MilestoneEstimate::Unreachable);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(years_to_target(12000.0, 0.0, 100.0, 0.0), MilestoneEstimate::EstimatedYears(10.0));
    }

    #[test]
    fn test_negative_rate_never_yields_nan() {
        let estimate = years_to_target(102000.0, 0.0, 100.0, -0.5);
        assert!(estimate.years().map_or(true, |y| y.is_finite()));
    }

    #[test]
    fn test_calculate_milestones_uses_special_share() {
        let assumptions = Assumptions::default_2024();
        let balances = AccountBalances { oa: 0.0, sa: 20000.0, ma: 0.0 };

        let report = calculate_milestones(&assumptions, &balances, 2220.0, AgeBand::UpTo35);
        assert_eq!(report.basic, MilestoneEstimate::EstimatedYears(10.6));
        assert!(report.full.years().unwrap() > 10.6);
        assert!(report.enhanced.years().unwrap() > report.full.years().unwrap());

        // No special share above 65
        let report = calculate_milestones(&assumptions, &balances, 2220.0, AgeBand::Above65);
        assert_eq!(report.basic, MilestoneEstimate::Unreachable);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(MilestoneEstimate::AlreadyAchieved.to_string(), "Already achieved");
        assert_eq!(
            MilestoneEstimate::EstimatedYears(12.7).to_string(),
            "Will reach in approximately 12.7 years"
        );
    }
}
