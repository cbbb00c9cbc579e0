//! Core projection engine for monthly account balance projections

use crate::assumptions::Assumptions;
use crate::error::{ensure_non_negative, Error, Result};
use crate::member::{AccountBalances, AgeBand};
use super::series::{MonthlySnapshot, ProjectionSeries};
use super::state::ProjectionState;

/// Longest horizon a projection run accepts
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub years: u32,

    /// Annual growth applied to the contribution from year 2 onwards
    pub annual_increment: f64,

    /// Band whose allocation shares split each month's contribution
    pub allocation_band: AgeBand,

    /// Balances before the first projected month
    pub opening_balances: AccountBalances,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years: 20,
            annual_increment: 0.03,
            allocation_band: AgeBand::UpTo35,
            opening_balances: AccountBalances::default(),
        }
    }
}

impl ProjectionConfig {
    /// Reject oversized horizons and negative or non-finite increments and balances
    pub fn validate(&self) -> Result<()> {
        if self.years > MAX_PROJECTION_YEARS {
            return Err(Error::InvalidInput(format!(
                "projection horizon must be at most {MAX_PROJECTION_YEARS} years, got {}",
                self.years
            )));
        }
        ensure_non_negative("annual increment", self.annual_increment)?;
        ensure_non_negative("opening OA balance", self.opening_balances.oa)?;
        ensure_non_negative("opening SA balance", self.opening_balances.sa)?;
        ensure_non_negative("opening MA balance", self.opening_balances.ma)?;
        Ok(())
    }

    /// Number of months to project
    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate inputs, then project
    pub fn try_project(&self, monthly_contribution: f64) -> Result<ProjectionSeries> {
        self.config.validate()?;
        ensure_non_negative("monthly contribution", monthly_contribution)?;
        Ok(self.project(monthly_contribution))
    }

    /// Project balances month by month for the configured horizon
    pub fn project(&self, monthly_contribution: f64) -> ProjectionSeries {
        let shares = self.assumptions.allocation.get(self.config.allocation_band);
        let rates = &self.assumptions.interest;

        let mut series = ProjectionSeries::new(self.config.opening_balances);
        let mut state = ProjectionState::new(monthly_contribution, self.config.opening_balances);

        log::debug!(
            "projecting {} months from {:.2}/month, increment {}, band {}",
            self.config.months(),
            monthly_contribution,
            self.config.annual_increment,
            self.config.allocation_band
        );

        for _ in 0..self.config.months() {
            state.apply_annual_increment(self.config.annual_increment);

            let month = state.month;
            let contribution = state.monthly_contribution;
            state.credit_month(&shares, rates);

            let b = state.balances;
            series.add_snapshot(MonthlySnapshot {
                month,
                contribution,
                oa: b.oa,
                sa: b.sa,
                ma: b.ma,
                total: b.oa + b.sa + b.ma,
            });
        }

        series
    }
}

/// Project with the default assumptions
pub fn project(
    monthly_contribution: f64,
    years: u32,
    annual_increment: f64,
    allocation_band: AgeBand,
) -> ProjectionSeries {
    let config = ProjectionConfig {
        years,
        annual_increment,
        allocation_band,
        ..Default::default()
    };
    ProjectionEngine::new(Assumptions::default_2024(), config).project(monthly_contribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn engine(years: u32) -> ProjectionEngine {
        let config = ProjectionConfig {
            years,
            ..Default::default()
        };
        ProjectionEngine::new(Assumptions::default_2024(), config)
    }

    #[test]
    fn test_projection_runs() {
        let series = engine(20).project(2220.0);
        assert_eq!(series.len(), 240);
        assert_eq!(series.snapshots[0].month, 0);
        assert_eq!(series.last().unwrap().month, 239);
    }

    #[test]
    fn test_zero_years_is_empty() {
        let series = engine(0).project(2220.0);
        assert!(series.is_empty());
    }

    #[test]
    fn test_first_month_credit() {
        let series = engine(1).project(1000.0);
        let first = &series.snapshots[0];

        assert_relative_eq!(first.oa, 1000.0 * 0.68649 * (1.0 + 0.025 / 12.0), max_relative = 1e-12);
        assert_relative_eq!(first.sa, 1000.0 * 0.23243 * (1.0 + 0.04 / 12.0), max_relative = 1e-12);
        assert_relative_eq!(first.ma, 1000.0 * 0.08108 * (1.0 + 0.04 / 12.0), max_relative = 1e-12);
        assert_relative_eq!(first.total, first.oa + first.sa + first.ma, max_relative = 1e-12);
    }

    #[test]
    fn test_annual_increment_applies_from_month_12() {
        let series = engine(3).project(1000.0);
        assert_eq!(series.snapshots[11].contribution, 1000.0);
        assert_relative_eq!(series.snapshots[12].contribution, 1030.0, max_relative = 1e-12);
        assert_relative_eq!(series.snapshots[23].contribution, 1030.0, max_relative = 1e-12);
        assert_relative_eq!(series.snapshots[24].contribution, 1000.0 * 1.03 * 1.03, max_relative = 1e-12);
    }

    #[test]
    fn test_balances_never_decrease() {
        let series = engine(40).project(1500.0);
        for pair in series.snapshots.windows(2) {
            assert!(pair[1].oa >= pair[0].oa);
            assert!(pair[1].sa >= pair[0].sa);
            assert!(pair[1].ma >= pair[0].ma);
        }
    }

    #[test]
    fn test_longer_run_extends_shorter_run() {
        let short = engine(5).project(2220.0);
        let long = engine(6).project(2220.0);
        assert_eq!(&long.snapshots[..short.len()], &short.snapshots[..]);
    }

    #[test]
    fn test_opening_balances_compound() {
        let config = ProjectionConfig {
            years: 1,
            annual_increment: 0.0,
            opening_balances: AccountBalances { oa: 12000.0, sa: 0.0, ma: 0.0 },
            ..Default::default()
        };
        let series = ProjectionEngine::new(Assumptions::default_2024(), config).project(0.0);
        let expected = 12000.0 * (1.0 + 0.025 / 12.0_f64).powi(12);
        assert_relative_eq!(series.last().unwrap().oa, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_band_shares_drive_split() {
        let config = ProjectionConfig {
            years: 1,
            allocation_band: AgeBand::Above65,
            ..Default::default()
        };
        let series = ProjectionEngine::new(Assumptions::default_2024(), config).project(500.0);
        assert_eq!(series.last().unwrap().sa, 0.0);
    }

    #[test]
    fn test_try_project_rejects_bad_inputs() {
        assert!(matches!(engine(1).try_project(-5.0), Err(Error::InvalidInput(_))));

        let config = ProjectionConfig {
            annual_increment: f64::NAN,
            ..Default::default()
        };
        let engine = ProjectionEngine::new(Assumptions::default_2024(), config);
        assert!(engine.try_project(100.0).is_err());
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let config = ProjectionConfig {
            years: 400_000_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));
        assert_eq!(config.months(), u32::MAX);

        let engine = ProjectionEngine::new(Assumptions::default_2024(), config);
        assert!(matches!(engine.try_project(100.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_longest_horizon_accepted() {
        let config = ProjectionConfig {
            years: MAX_PROJECTION_YEARS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.months(), 1200);
        assert!(ProjectionConfig { years: MAX_PROJECTION_YEARS + 1, ..config }.validate().is_err());
    }

    #[test]
    fn test_free_function_matches_engine() {
        let a = project(2220.0, 2, 0.03, AgeBand::UpTo35);
        let b = engine(2).project(2220.0);
        assert_eq!(a, b);
    }
}
