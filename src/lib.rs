//! CPF Calculator - contribution, allocation and balance projection engine
//!
//! This library provides:
//! - Age band classification from a birth date
//! - Monthly contribution calculation under the ordinary and annual wage ceilings
//! - Allocation of contributions to the MediSave, Special and Ordinary accounts
//! - Month-by-month balance projections with annual salary growth
//! - Time-to-target estimates for the retirement sum milestones

pub mod assumptions;
pub mod contribution;
pub mod error;
pub mod member;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use contribution::{AllocationResult, AllocationSplitter, ContributionCalculator, ContributionResult};
pub use error::{Error, Result};
pub use member::{AccountBalances, AgeBand, Member, WageInput};
pub use projection::{MilestoneEstimate, ProjectionConfig, ProjectionEngine, ProjectionSeries};
pub use scenario::ScenarioRunner;
