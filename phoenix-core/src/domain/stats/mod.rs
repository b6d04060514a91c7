//! Derived-state computations.
//!
//! Pure, total functions over snapshots of the entity store. Nothing here
//! mutates a record or caches a result: every value is re-derived from
//! current data on each call, so a render cycle can never observe stale
//! aggregates. Input validation (negative quantities, out-of-range progress)
//! is the store's job at the mutation boundary, not checked again here.

mod checklists;
mod dashboard;
mod finance;
mod materials;
mod schedule;

pub use checklists::{checklist_progress, is_checklist_done};
pub use dashboard::{average_progress, project_status_counts, upcoming_reminders, ProjectStatusCounts};
pub use finance::{finance_summary, FinanceSummary};
pub use materials::{filter_materials, material_stats, supply_ratio, MaterialStats};
pub use schedule::milestone_pipeline_ratio;

use crate::domain::models::DailyLog;

/// Order-preserving ownership filter, used to gather the logs handed to the
/// report pipeline for one project.
pub fn logs_for_project<'a>(logs: &'a [DailyLog], project_id: &str) -> Vec<&'a DailyLog> {
    logs.iter().filter(|l| l.project_id == project_id).collect()
}
