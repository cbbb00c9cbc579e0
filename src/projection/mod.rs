//! Balance projection and retirement sum milestones

mod engine;
mod milestones;
mod series;
mod state;

pub use engine::{project, ProjectionConfig, ProjectionEngine, MAX_PROJECTION_YEARS};
pub use milestones::{
    calculate_milestones, years_to_target, MilestoneEstimate, MilestoneReport, MAX_MILESTONE_YEARS,
};
pub use series::{MonthlySnapshot, ProjectionSeries, ProjectionSummary};
pub use state::ProjectionState;
