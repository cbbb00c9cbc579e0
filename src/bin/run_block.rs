//! Run the contribution and projection pipeline for a block of members
//!
//! Reads members from a CSV file and writes one summary row per member.
//! Accepts config via environment variables:
//!   MEMBERS_CSV, VALUATION_DATE (YYYY-MM-DD), PROJECTION_YEARS,
//!   ANNUAL_INCREMENT (decimal), OUTPUT_CSV
//! Pass --json to print the outcomes as JSON instead of writing CSV

use std::env;
use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use serde::Serialize;

use cpf_calculator::member::{load_members, loader::DEFAULT_MEMBERS_PATH};
use cpf_calculator::projection::MilestoneEstimate;
use cpf_calculator::scenario::MemberOutcome;
use cpf_calculator::{ProjectionConfig, ScenarioRunner};

const DEFAULT_OUTPUT_PATH: &str = "block_projection_output.csv";

/// Flat output row for the block CSV
#[derive(Debug, Serialize)]
struct OutputRow {
    member_id: u32,
    age: i32,
    band: String,
    total_contribution: f64,
    employee_share: f64,
    employer_share: f64,
    medisave: f64,
    special: f64,
    ordinary: f64,
    final_oa: f64,
    final_sa: f64,
    final_ma: f64,
    final_total: f64,
    brs: String,
    frs: String,
    ers: String,
}

fn milestone_cell(estimate: &MilestoneEstimate) -> String {
    match estimate {
        MilestoneEstimate::AlreadyAchieved => "achieved".to_string(),
        MilestoneEstimate::Unreachable => "unreachable".to_string(),
        MilestoneEstimate::EstimatedYears(years) => format!("{years:.1}"),
    }
}

impl From<&MemberOutcome> for OutputRow {
    fn from(o: &MemberOutcome) -> Self {
        Self {
            member_id: o.member_id,
            age: o.age,
            band: o.band.label().to_string(),
            total_contribution: o.contribution.total,
            employee_share: o.contribution.employee_share,
            employer_share: o.contribution.employer_share,
            medisave: o.allocation.medisave,
            special: o.allocation.special,
            ordinary: o.allocation.ordinary,
            final_oa: o.projection.final_oa,
            final_sa: o.projection.final_sa,
            final_ma: o.projection.final_ma,
            final_total: o.projection.final_total,
            brs: milestone_cell(&o.milestones.basic),
            frs: milestone_cell(&o.milestones.full),
            ers: milestone_cell(&o.milestones.enhanced),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.parse().with_context(|| format!("parsing {key}={raw}")),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|a| a == "--json");
    let members_path = env::var("MEMBERS_CSV").unwrap_or_else(|_| DEFAULT_MEMBERS_PATH.to_string());
    let output_path = env::var("OUTPUT_CSV").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());
    let valuation_date: NaiveDate = env_or("VALUATION_DATE", Local::now().date_naive())?;

    let config = ProjectionConfig {
        years: env_or("PROJECTION_YEARS", 20u32)?,
        annual_increment: env_or("ANNUAL_INCREMENT", 0.03f64)?,
        ..Default::default()
    };
    config.validate()?;

    let start = Instant::now();
    let members = load_members(&members_path).with_context(|| format!("loading {members_path}"))?;
    eprintln!("Loaded {} members in {:?}", members.len(), start.elapsed());

    let runner = ScenarioRunner::new();

    // Members are independent, run them in parallel
    let proj_start = Instant::now();
    let results: Vec<_> = members
        .par_iter()
        .map(|member| (member.member_id, runner.run_member(member, valuation_date, &config)))
        .collect();
    eprintln!("Projections complete in {:?}", proj_start.elapsed());

    let mut outcomes = Vec::with_capacity(results.len());
    for (member_id, result) in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => log::warn!("member {member_id} skipped: {e}"),
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    let file = File::create(&output_path).with_context(|| format!("creating {output_path}"))?;
    let mut writer = csv::Writer::from_writer(file);
    for outcome in &outcomes {
        writer.serialize(OutputRow::from(outcome))?;
    }
    writer.flush()?;

    let block_total: f64 = outcomes.iter().map(|o| o.contribution.total).sum();
    println!("Members processed: {} of {}", outcomes.len(), members.len());
    println!("Total monthly contribution: {block_total:.2}");
    println!("Results written to: {output_path}");

    Ok(())
}
