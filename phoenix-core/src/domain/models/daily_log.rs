use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily site log entry for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub weather: String,
    pub manpower_count: u32,
    pub activities: String,
    /// Empty string means no issues were reported that day.
    pub issues: String,
}

impl DailyLog {
    pub fn has_issues(&self) -> bool {
        !self.issues.trim().is_empty()
    }
}
