use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle state of a construction project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ProjectStatus {
    #[serde(rename = "Chuẩn bị")]
    #[strum(serialize = "Chuẩn bị")]
    Planning,
    #[serde(rename = "Đang thi công")]
    #[strum(serialize = "Đang thi công")]
    InProgress,
    #[serde(rename = "Nghiệm thu")]
    #[strum(serialize = "Nghiệm thu")]
    Inspection,
    #[serde(rename = "Hoàn thành")]
    #[strum(serialize = "Hoàn thành")]
    Completed,
    #[serde(rename = "Chậm tiến độ")]
    #[strum(serialize = "Chậm tiến độ")]
    Delayed,
}

/// A fire-protection installation project.
///
/// `progress` is the top-line percentage entered by the project manager. It is
/// deliberately independent of milestone progress: milestones track granular
/// schedule items, the project field tracks the headline number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub client: String,
    pub status: ProjectStatus,
    /// 0-100.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    /// Facility classification, e.g. "Căn hộ cao tầng", "Nhà xưởng công nghiệp".
    pub pccc_type: String,
}
