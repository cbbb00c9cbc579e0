//! Projection output structures

use serde::{Deserialize, Serialize};
use std::io;

use crate::error::Result;
use crate::member::AccountBalances;

/// Balances at the end of one projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month index, starting at 0
    pub month: u32,
    /// Contribution credited this month
    pub contribution: f64,
    pub oa: f64,
    pub sa: f64,
    pub ma: f64,
    pub total: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Balances before the first month
    pub opening_balances: AccountBalances,

    /// Monthly snapshots in order
    pub snapshots: Vec<MonthlySnapshot>,
}

impl ProjectionSeries {
    pub fn new(opening_balances: AccountBalances) -> Self {
        Self {
            opening_balances,
            snapshots: Vec::new(),
        }
    }

    /// Add a snapshot
    pub fn add_snapshot(&mut self, snapshot: MonthlySnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&MonthlySnapshot> {
        self.snapshots.last()
    }

    /// Balances after the final month, or the opening balances for an empty run
    pub fn final_balances(&self) -> AccountBalances {
        self.last()
            .map(|s| AccountBalances { oa: s.oa, sa: s.sa, ma: s.ma })
            .unwrap_or(self.opening_balances)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributed: f64 = self.snapshots.iter().map(|s| s.contribution).sum();
        let closing = self.final_balances();
        let total_interest = closing.total() - self.opening_balances.total() - total_contributed;

        ProjectionSummary {
            total_months: self.snapshots.len() as u32,
            total_contributed,
            total_interest,
            final_oa: closing.oa,
            final_sa: closing.sa,
            final_ma: closing.ma,
            final_total: closing.total(),
        }
    }

    /// Write the monthly series as CSV
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for snapshot in &self.snapshots {
            csv_writer.serialize(snapshot)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_contributed: f64,
    pub total_interest: f64,
    pub final_oa: f64,
    pub final_sa: f64,
    pub final_ma: f64,
    pub final_total: f64,
}
