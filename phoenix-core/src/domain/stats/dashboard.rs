use chrono::{Days, NaiveDate};

use crate::domain::models::{Project, ProjectStatus};

/// Headline counts for the dashboard stat row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectStatusCounts {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub delayed: usize,
    pub inspection: usize,
}

pub fn project_status_counts(projects: &[Project]) -> ProjectStatusCounts {
    let mut counts = ProjectStatusCounts {
        total: projects.len(),
        ..Default::default()
    };
    for project in projects {
        match project.status {
            ProjectStatus::InProgress => counts.in_progress += 1,
            ProjectStatus::Completed => counts.completed += 1,
            ProjectStatus::Delayed => counts.delayed += 1,
            ProjectStatus::Inspection => counts.inspection += 1,
            ProjectStatus::Planning => {}
        }
    }
    counts
}

/// Mean project progress, rounded to the nearest integer; 0 when empty.
pub fn average_progress(projects: &[Project]) -> u8 {
    if projects.is_empty() {
        return 0;
    }
    let sum: u32 = projects.iter().map(|p| u32::from(p.progress)).sum();
    (f64::from(sum) / projects.len() as f64).round() as u8
}

/// Projects needing attention soon, in input order.
///
/// A project qualifies when its end date falls within `[today, today +
/// horizon_days]` (both ends inclusive) or it is awaiting inspection, which
/// qualifies regardless of date. Completed projects never appear, and a
/// project already past its end date is excluded unless inspection keeps it
/// in.
pub fn upcoming_reminders<'a>(
    projects: &'a [Project],
    today: NaiveDate,
    horizon_days: u64,
) -> Vec<&'a Project> {
    let horizon = today
        .checked_add_days(Days::new(horizon_days))
        .unwrap_or(NaiveDate::MAX);
    projects
        .iter()
        .filter(|p| {
            let ends_soon = p.end_date >= today && p.end_date <= horizon;
            let inspecting = p.status == ProjectStatus::Inspection;
            (ends_soon || inspecting) && p.status != ProjectStatus::Completed
        })
        .collect()
}
