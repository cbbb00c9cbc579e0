//! Plain-text explanations of contribution and projection results

use crate::assumptions::Assumptions;
use crate::contribution::{AllocationResult, ContributionResult};
use crate::member::AgeBand;
use crate::projection::{MilestoneReport, ProjectionSeries};

/// OA balance multiple used for the property purchase estimate
pub const PROPERTY_OA_MULTIPLE: f64 = 4.0;

/// Cap on the property purchase estimate
pub const PROPERTY_ESTIMATE_CAP: f64 = 1_000_000.0;

/// Format an amount as dollars with thousands separators, e.g. `$12,345.60`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

fn pct(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Newline-terminated block, one entry per line
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Breakdown of a month's contribution and its account allocation
pub fn contribution_explanation(
    assumptions: &Assumptions,
    band: AgeBand,
    ordinary_wages: f64,
    contribution: &ContributionResult,
    allocation: &AllocationResult,
) -> String {
    let rates = assumptions.contribution.get(band);
    let shares = assumptions.allocation.get(band);
    let mut lines = vec![
        format!("Contribution breakdown ({band})"),
        format!("Monthly ordinary wages: {}", format_money(ordinary_wages)),
        format!("  Employee share  {:>6} = {}", pct(rates.employee), format_money(contribution.employee_share)),
        format!("  Employer share  {:>6} = {}", pct(rates.employer), format_money(contribution.employer_share)),
        format!("  Total           {:>6} = {}", pct(rates.total), format_money(contribution.total)),
        String::new(),
        "Account allocation".to_string(),
        format!("  Ordinary Account  {:>6} = {}", pct(shares.ordinary), format_money(allocation.ordinary)),
        format!("  Special Account   {:>6} = {}", pct(shares.special), format_money(allocation.special)),
        format!("  MediSave Account  {:>6} = {}", pct(shares.medisave), format_money(allocation.medisave)),
        String::new(),
        format!("Annual contribution (excluding bonuses): {}", format_money(contribution.total * 12.0)),
    ];
    if ordinary_wages > 0.0 {
        lines.push(format!("Share of monthly income: {}", pct(contribution.total / ordinary_wages)));
    }
    join_lines(&lines)
}

/// Headline figures from a projection
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProjectionInsights {
    pub years: u32,
    pub final_total: f64,
    pub property_estimate: f64,
    pub final_ma: f64,
}

impl ProjectionInsights {
    pub fn from_series(years: u32, series: &ProjectionSeries) -> Self {
        let closing = series.final_balances();
        Self {
            years,
            final_total: closing.total(),
            property_estimate: (closing.oa * PROPERTY_OA_MULTIPLE).min(PROPERTY_ESTIMATE_CAP),
            final_ma: closing.ma,
        }
    }

    pub fn render(&self, assumptions: &Assumptions) -> String {
        join_lines(&[
            format!("Projected total balance by year {}: {}", self.years, format_money(self.final_total)),
            format!("Property value fundable from OA: up to {}", format_money(self.property_estimate)),
            format!("Special Account interest rate: {} p.a.", pct(assumptions.interest.sa)),
            format!("Projected MediSave balance: {}", format_money(self.final_ma)),
        ])
    }
}

/// One line per retirement sum
pub fn milestone_lines(assumptions: &Assumptions, report: &MilestoneReport) -> String {
    let sums = &assumptions.retirement_sums;
    join_lines(&[
        format!("Basic Retirement Sum ({}): {}", format_money(sums.basic), report.basic),
        format!("Full Retirement Sum ({}): {}", format_money(sums.full), report.full),
        format!("Enhanced Retirement Sum ({}): {}", format_money(sums.enhanced), report.enhanced),
    ])
}
