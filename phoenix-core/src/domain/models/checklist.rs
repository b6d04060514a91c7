use serde::{Deserialize, Serialize};

/// One line item on a QC/acceptance checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub category: String,
    pub task: String,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Compliance citation, e.g. "TCVN 5738:2021".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_ref: Option<String>,
}

/// An ordered QC checklist attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub items: Vec<ChecklistItem>,
}
