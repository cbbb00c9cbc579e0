//! Monthly contribution calculation under the ordinary and annual wage ceilings

use serde::{Deserialize, Serialize};

use super::money::round_cents;
use crate::assumptions::Assumptions;
use crate::member::{AgeBand, WageInput};

/// Contribution payable for one month, settled to cents
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionResult {
    pub total: f64,
    pub employee_share: f64,
    pub employer_share: f64,

    /// Ordinary wages after the monthly ceiling
    pub capped_ordinary: f64,

    /// Additional wages after the remaining annual ceiling
    pub capped_additional: f64,
}

impl ContributionResult {
    /// Wage base the rates were applied to
    pub fn wage_base(&self) -> f64 {
        self.capped_ordinary + self.capped_additional
    }
}

/// Applies the band's rates to ceiling-capped wages
#[derive(Debug, Clone)]
pub struct ContributionCalculator {
    assumptions: Assumptions,
}

impl ContributionCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Compute the contribution for a validated wage input
    pub fn compute_for(&self, wages: &WageInput, band: AgeBand) -> ContributionResult {
        self.compute(wages.ordinary_wages, wages.additional_wages, band, wages.ytd_wages)
    }

    /// Compute the contribution for one month
    ///
    /// Inputs are expected to be non-negative; use [`WageInput::new`] to
    /// validate at the boundary.
    pub fn compute(
        &self,
        ordinary_wages: f64,
        additional_wages: f64,
        band: AgeBand,
        ytd_wages: f64,
    ) -> ContributionResult {
        let rates = self.assumptions.contribution.get(band);
        let ceilings = &self.assumptions.ceilings;

        let remaining_annual = (ceilings.annual_total - ytd_wages).max(0.0);
        let capped_ordinary = ordinary_wages.min(ceilings.monthly_ordinary);
        let remaining_for_additional = (remaining_annual - capped_ordinary).max(0.0);
        let capped_additional = additional_wages.min(remaining_for_additional);

        if capped_ordinary < ordinary_wages || capped_additional < additional_wages {
            log::debug!(
                "wages capped: ordinary {ordinary_wages} -> {capped_ordinary}, \
                 additional {additional_wages} -> {capped_additional}"
            );
        }

        let base = capped_ordinary + capped_additional;
        let total = round_cents(rates.total * base);
        let employee_share = round_cents(rates.employee * base);
        let employer_share = round_cents(total - employee_share);

        ContributionResult {
            total,
            employee_share,
            employer_share,
            capped_ordinary,
            capped_additional,
        }
    }
}
