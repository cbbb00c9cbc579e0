//! Split a total contribution across the MediSave, Special and Ordinary accounts

use serde::{Deserialize, Serialize};

use super::money::round_cents;
use crate::assumptions::AllocationTable;
use crate::member::AgeBand;

/// Amounts credited to each account
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    pub medisave: f64,
    pub special: f64,
    pub ordinary: f64,
}

impl AllocationResult {
    pub fn total(&self) -> f64 {
        self.medisave + self.special + self.ordinary
    }
}

/// Allocates contributions using the band's shares
#[derive(Debug, Clone)]
pub struct AllocationSplitter {
    table: AllocationTable,
}

impl AllocationSplitter {
    pub fn new(table: AllocationTable) -> Self {
        Self { table }
    }

    /// Split `total` for `band`
    ///
    /// MediSave and Special are rounded to cents; Ordinary takes the
    /// remainder so the three amounts reconcile to `total`.
    pub fn allocate(&self, total: f64, band: AgeBand) -> AllocationResult {
        if total <= 0.0 {
            return AllocationResult::default();
        }

        let shares = self.table.get(band);
        let medisave = round_cents(shares.medisave * total);
        let special = round_cents(shares.special * total);
        let ordinary = round_cents(total - medisave - special);

        AllocationResult {
            medisave,
            special,
            ordinary,
        }
    }
}
