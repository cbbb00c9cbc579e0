//! Projection state carried between months

use crate::assumptions::{AllocationShares, InterestRates};
use crate::member::AccountBalances;

/// Balances and contribution level at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months already projected
    pub month: u32,

    /// Contribution paid each month of the current projection year
    pub monthly_contribution: f64,

    /// Account balances at end of the last projected month
    pub balances: AccountBalances,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn new(monthly_contribution: f64, opening_balances: AccountBalances) -> Self {
        Self {
            month: 0,
            monthly_contribution,
            balances: opening_balances,
        }
    }

    /// Apply the annual raise at the start of every projection year after the first
    pub fn apply_annual_increment(&mut self, annual_increment: f64) {
        if self.month > 0 && self.month % 12 == 0 {
            self.monthly_contribution *= 1.0 + annual_increment;
        }
    }

    /// Credit this month's contribution, then a month of interest on each account
    pub fn credit_month(&mut self, shares: &AllocationShares, rates: &InterestRates) {
        let contribution = self.monthly_contribution;
        let b = &mut self.balances;

        b.oa = (b.oa + contribution * shares.ordinary) * (1.0 + rates.oa / 12.0);
        b.sa = (b.sa + contribution * shares.special) * (1.0 + rates.sa / 12.0);
        b.ma = (b.ma + contribution * shares.medisave) * (1.0 + rates.ma / 12.0);

        self.month += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_only_at_year_boundaries() {
        let mut state = ProjectionState::new(100.0, AccountBalances::default());
        state.apply_annual_increment(0.10);
        assert_eq!(state.monthly_contribution, 100.0);

        state.month = 11;
        state.apply_annual_increment(0.10);
        assert_eq!(state.monthly_contribution, 100.0);

        state.month = 12;
        state.apply_annual_increment(0.10);
        assert!((state.monthly_contribution - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_then_interest() {
        let mut state = ProjectionState::new(1200.0, AccountBalances::default());
        let shares = AllocationShares::new(0.0, 0.0, 1.0);
        let rates = InterestRates { oa: 0.12, sa: 0.0, ma: 0.0 };

        state.credit_month(&shares, &rates);
        // (0 + 1200) * 1.01
        assert!((state.balances.oa - 1212.0).abs() < 1e-9);
        assert_eq!(state.balances.sa, 0.0);
        assert_eq!(state.month, 1);
    }
}
