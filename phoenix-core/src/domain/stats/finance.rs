use crate::domain::models::{Transaction, TransactionKind};

/// Income/expense totals for a project's finance tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinanceSummary {
    pub income: u64,
    pub expense: u64,
}

impl FinanceSummary {
    /// Signed balance; negative while disbursements outpace payments.
    pub fn net(&self) -> i64 {
        self.income as i64 - self.expense as i64
    }
}

pub fn finance_summary(transactions: &[Transaction]) -> FinanceSummary {
    let mut summary = FinanceSummary::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => summary.income += tx.amount,
            TransactionKind::Expense => summary.expense += tx.amount,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(id: &str, amount: u64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: id.to_string(),
            project_id: "p1".to_string(),
            label: "Thanh toán đợt 1".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
            kind,
        }
    }

    #[test]
    fn totals_and_net_balance() {
        let transactions = vec![
            tx("t1", 800_000_000, TransactionKind::Expense),
            tx("t2", 1_200_000_000, TransactionKind::Income),
        ];

        let summary = finance_summary(&transactions);
        assert_eq!(summary.income, 1_200_000_000);
        assert_eq!(summary.expense, 800_000_000);
        assert_eq!(summary.net(), 400_000_000);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(finance_summary(&[]), FinanceSummary::default());
        assert_eq!(finance_summary(&[]).net(), 0);
    }
}
