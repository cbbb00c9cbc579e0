//! CPF Calculator CLI
//!
//! Command-line interface for contribution breakdowns, balance projections
//! and retirement sum milestones

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use cpf_calculator::assumptions::MONTHLY_ORDINARY_WAGE_CEILING;
use cpf_calculator::member::{validate_birth_date, AccountBalances, AgeBand, WageInput};
use cpf_calculator::projection::calculate_milestones;
use cpf_calculator::report::{contribution_explanation, milestone_lines, ProjectionInsights};
use cpf_calculator::{AllocationSplitter, Assumptions, ContributionCalculator, ProjectionConfig, ProjectionEngine};

#[derive(Parser)]
#[command(name = "cpf-calculator")]
#[command(about = "CPF contribution calculator with balance projections")]
struct Cli {
    /// Directory with contribution_rates.csv, allocation_rates.csv and interest_rates.csv
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MemberArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: NaiveDate,

    /// Evaluation date, defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

impl MemberArgs {
    fn band(&self) -> Result<AgeBand> {
        let today = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        validate_birth_date(self.birth_date, today)?;
        Ok(AgeBand::classify(self.birth_date, today))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Contribution and allocation for one month
    Contribute {
        #[command(flatten)]
        member: MemberArgs,

        /// Monthly ordinary wages
        #[arg(long, value_parser = parse_ordinary_wages)]
        ordinary_wages: f64,

        /// Additional wages (bonus, etc.)
        #[arg(long, default_value_t = 0.0)]
        additional_wages: f64,

        /// Total wages year-to-date
        #[arg(long, default_value_t = 0.0)]
        ytd_wages: f64,
    },

    /// Project account balances
    Project {
        #[command(flatten)]
        member: MemberArgs,

        /// Monthly ordinary wages
        #[arg(long, value_parser = parse_ordinary_wages)]
        monthly_wages: f64,

        /// Projection period in years
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=40))]
        years: u32,

        /// Expected annual salary increment in percent
        #[arg(long, default_value_t = 3.0, value_parser = parse_increment_pct)]
        increment: f64,

        #[command(flatten)]
        balances: BalanceArgs,

        /// Write the monthly series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Years to reach the retirement sums
    Milestones {
        #[command(flatten)]
        member: MemberArgs,

        /// Monthly ordinary wages
        #[arg(long, value_parser = parse_ordinary_wages)]
        monthly_wages: f64,

        #[command(flatten)]
        balances: BalanceArgs,
    },
}

#[derive(Args)]
struct BalanceArgs {
    /// Current Ordinary Account balance
    #[arg(long, default_value_t = 0.0)]
    oa: f64,

    /// Current Special Account balance
    #[arg(long, default_value_t = 0.0)]
    sa: f64,

    /// Current MediSave Account balance
    #[arg(long, default_value_t = 0.0)]
    ma: f64,
}

impl BalanceArgs {
    fn to_balances(&self) -> Result<AccountBalances> {
        Ok(AccountBalances::new(self.oa, self.sa, self.ma)?)
    }
}

fn parse_ordinary_wages(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=MONTHLY_ORDINARY_WAGE_CEILING).contains(&value) {
        return Err(format!("must be between 0 and {MONTHLY_ORDINARY_WAGE_CEILING:.2}"));
    }
    Ok(value)
}

fn parse_increment_pct(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=10.0).contains(&value) {
        return Err("must be between 0 and 10 percent".to_string());
    }
    Ok(value / 100.0)
}

fn load_assumptions(dir: Option<&PathBuf>) -> Result<Assumptions> {
    match dir {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display())),
        None => Ok(Assumptions::default_2024()),
    }
}

/// Monthly contribution on ordinary wages alone
fn recurring_contribution(assumptions: &Assumptions, monthly_wages: f64, band: AgeBand) -> f64 {
    ContributionCalculator::new(assumptions.clone())
        .compute(monthly_wages, 0.0, band, 0.0)
        .total
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = load_assumptions(cli.assumptions.as_ref())?;

    match &cli.command {
        Commands::Contribute { member, ordinary_wages, additional_wages, ytd_wages } => {
            let band = member.band()?;
            let wages = WageInput::new(*ordinary_wages, *additional_wages, *ytd_wages)?;

            let contribution = ContributionCalculator::new(assumptions.clone()).compute_for(&wages, band);
            let allocation = AllocationSplitter::new(assumptions.allocation.clone()).allocate(contribution.total, band);

            if cli.json {
                let body = serde_json::json!({
                    "band": band,
                    "contribution": contribution,
                    "allocation": allocation,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!("{}", contribution_explanation(&assumptions, band, *ordinary_wages, &contribution, &allocation));
            }
        }

        Commands::Project { member, monthly_wages, years, increment, balances, csv } => {
            let band = member.band()?;
            let monthly = recurring_contribution(&assumptions, *monthly_wages, band);

            let config = ProjectionConfig {
                years: *years,
                annual_increment: *increment,
                allocation_band: band,
                opening_balances: balances.to_balances()?,
            };
            let series = ProjectionEngine::new(assumptions.clone(), config).try_project(monthly)?;
            let insights = ProjectionInsights::from_series(*years, &series);

            if let Some(path) = csv {
                let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
                series.write_csv(file)?;
                log::info!("wrote {} months to {}", series.len(), path.display());
            }

            if cli.json {
                let body = serde_json::json!({
                    "band": band,
                    "monthly_contribution": monthly,
                    "summary": series.summary(),
                    "insights": insights,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Age group: {band}");
                println!("Monthly contribution: {monthly:.2}");
                println!();
                print!("{}", insights.render(&assumptions));
            }
        }

        Commands::Milestones { member, monthly_wages, balances } => {
            let band = member.band()?;
            let monthly = recurring_contribution(&assumptions, *monthly_wages, band);
            let report = calculate_milestones(&assumptions, &balances.to_balances()?, monthly, band);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", milestone_lines(&assumptions, &report));
            }
        }
    }

    Ok(())
}
