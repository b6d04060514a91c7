use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MilestoneStatus {
    Pending,
    Active,
    Completed,
}

/// A scheduled milestone on a project timeline.
///
/// `status` and `progress` are both user-editable and intentionally not tied
/// to each other; a milestone can sit at 45% while marked `Active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub project_id: String,
    pub label: String,
    pub date: NaiveDate,
    /// 0-100.
    pub progress: u8,
    pub status: MilestoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
