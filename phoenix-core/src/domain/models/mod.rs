//! Domain records for a PCCC contracting operation.
//!
//! Every record carries an opaque string id, unique within its collection.
//! Status enums keep the Vietnamese display strings used by the UI as their
//! serde representation, so serialized records match what the presentation
//! layer and the report prompts expect.

mod checklist;
mod daily_log;
mod document;
mod material;
mod milestone;
mod project;
mod transaction;

pub use checklist::{Checklist, ChecklistItem};
pub use daily_log::DailyLog;
pub use document::DocumentFile;
pub use material::{Material, MaterialStatus};
pub use milestone::{Milestone, MilestoneStatus};
pub use project::{Project, ProjectStatus};
pub use transaction::{Transaction, TransactionKind};
