//! Scenario runner for member pipelines and batch projections
//!
//! Pre-builds assumptions once, then runs the full contribution, allocation,
//! projection and milestone pipeline for many members or configurations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::assumptions::Assumptions;
use crate::contribution::{AllocationResult, AllocationSplitter, ContributionCalculator, ContributionResult};
use crate::error::Result;
use crate::member::{age_on, validate_birth_date, AgeBand, Member};
use crate::projection::{
    calculate_milestones, MilestoneReport, ProjectionConfig, ProjectionEngine, ProjectionSeries,
    ProjectionSummary,
};

/// Everything computed for one member on a valuation date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberOutcome {
    pub member_id: u32,
    pub age: i32,
    pub band: AgeBand,
    pub contribution: ContributionResult,
    pub allocation: AllocationResult,
    pub projection: ProjectionSummary,
    pub milestones: MilestoneReport,
}

/// Pre-loaded scenario runner
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the built-in 2024 assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_2024(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run the full pipeline for one member
    ///
    /// The projection starts from the member's balances, contributes the
    /// monthly total computed for the member, and splits it with the
    /// member's band. `config` supplies the horizon and increment.
    pub fn run_member(
        &self,
        member: &Member,
        valuation_date: NaiveDate,
        config: &ProjectionConfig,
    ) -> Result<MemberOutcome> {
        validate_birth_date(member.birth_date, valuation_date)?;
        let age = age_on(member.birth_date, valuation_date);
        let band = AgeBand::from_age(age);

        let calculator = ContributionCalculator::new(self.base_assumptions.clone());
        let contribution = calculator.compute_for(&member.wages, band);

        let splitter = AllocationSplitter::new(self.base_assumptions.allocation.clone());
        let allocation = splitter.allocate(contribution.total, band);

        // Recurring contribution excludes one-off additional wages
        let monthly = calculator.compute(member.wages.ordinary_wages, 0.0, band, 0.0).total;

        let member_config = ProjectionConfig {
            allocation_band: band,
            opening_balances: member.balances,
            ..config.clone()
        };
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), member_config);
        let series = engine.try_project(monthly)?;

        let milestones = calculate_milestones(&self.base_assumptions, &member.balances, monthly, band);

        Ok(MemberOutcome {
            member_id: member.member_id,
            age,
            band,
            contribution,
            allocation,
            projection: series.summary(),
            milestones,
        })
    }

    /// Run the pipeline for every member, keeping per-member errors
    pub fn run_batch(
        &self,
        members: &[Member],
        valuation_date: NaiveDate,
        config: &ProjectionConfig,
    ) -> Vec<Result<MemberOutcome>> {
        members
            .iter()
            .map(|m| self.run_member(m, valuation_date, config))
            .collect()
    }

    /// Project the same contribution under several salary increment rates
    pub fn run_increment_scenarios(
        &self,
        monthly_contribution: f64,
        config: &ProjectionConfig,
        increments: &[f64],
    ) -> Vec<ProjectionSeries> {
        increments
            .iter()
            .map(|&annual_increment| {
                let config = ProjectionConfig {
                    annual_increment,
                    ..config.clone()
                };
                ProjectionEngine::new(self.base_assumptions.clone(), config).project(monthly_contribution)
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::member::{AccountBalances, WageInput};
    use crate::projection::MilestoneEstimate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_member() -> Member {
        Member {
            member_id: 1,
            birth_date: date(1995, 4, 12),
            wages: WageInput::new(6000.0, 0.0, 0.0).unwrap(),
            balances: AccountBalances { oa: 25000.0, sa: 8000.0, ma: 6000.0 },
        }
    }

    #[test]
    fn test_run_member_end_to_end() {
        let runner = ScenarioRunner::new();
        let config = ProjectionConfig { years: 10, ..Default::default() };

        let outcome = runner.run_member(&test_member(), date(2024, 6, 30), &config).unwrap();
        assert_eq!(outcome.age, 29);
        assert_eq!(outcome.band, AgeBand::UpTo35);
        assert_eq!(outcome.contribution.total, 2220.0);
        assert_eq!(outcome.allocation.ordinary, 1524.01);
        assert_eq!(outcome.projection.total_months, 120);
        assert!(outcome.projection.final_total > 39000.0);
        assert!(matches!(outcome.milestones.basic, MilestoneEstimate::EstimatedYears(_)));
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let runner = ScenarioRunner::new();
        let err = runner
            .run_member(&test_member(), date(1990, 1, 1), &ProjectionConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_batch_keeps_one_result_per_member() {
        let runner = ScenarioRunner::new();
        let mut late = test_member();
        late.member_id = 2;
        late.birth_date = date(2030, 1, 1);

        let results = runner.run_batch(&[test_member(), late], date(2024, 6, 30), &ProjectionConfig::default());
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_higher_increment_grows_faster() {
        let runner = ScenarioRunner::new();
        let config = ProjectionConfig { years: 10, ..Default::default() };
        let runs = runner.run_increment_scenarios(2220.0, &config, &[0.0, 0.03, 0.05]);

        assert_eq!(runs.len(), 3);
        let finals: Vec<f64> = runs.iter().map(|s| s.summary().final_total).collect();
        assert!(finals[0] < finals[1] && finals[1] < finals[2]);
    }
}
