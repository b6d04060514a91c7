use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A payment or disbursement on a project.
///
/// The amount is always non-negative; direction is carried by `kind`, never by
/// the sign of the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub project_id: String,
    pub label: String,
    /// Amount in VND.
    pub amount: u64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}
