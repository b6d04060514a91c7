use serde::{Deserialize, Serialize};

/// A project document reference (permits, drawings, acceptance records).
///
/// `doc_type` and `status` are display-only classification tags; the core
/// never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub id: String,
    pub project_id: String,
    pub name: String,
    /// File format tag, e.g. "PDF", "DWG".
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Review state, e.g. "Approved", "Pending".
    pub status: String,
    /// Human-readable size, e.g. "2.4MB".
    pub size: String,
}
