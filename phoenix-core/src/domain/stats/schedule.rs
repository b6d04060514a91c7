use crate::domain::models::{Milestone, MilestoneStatus};

/// Fraction of milestones that have left `Pending`, sizing the visual
/// progress track on the schedule tab. 0.0 for an empty list.
pub fn milestone_pipeline_ratio(milestones: &[Milestone]) -> f64 {
    if milestones.is_empty() {
        return 0.0;
    }
    let started = milestones
        .iter()
        .filter(|m| m.status != MilestoneStatus::Pending)
        .count();
    started as f64 / milestones.len() as f64
}
