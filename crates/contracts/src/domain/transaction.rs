use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Filter for the finance transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn code(self) -> &'static str {
        match self {
            TransactionFilter::All => "all",
            TransactionFilter::Income => "income",
            TransactionFilter::Expense => "expense",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(TransactionFilter::All),
            "income" => Some(TransactionFilter::Income),
            "expense" => Some(TransactionFilter::Expense),
            _ => None,
        }
    }

    pub fn all() -> [TransactionFilter; 3] {
        [
            TransactionFilter::All,
            TransactionFilter::Income,
            TransactionFilter::Expense,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TransactionFilter::All => "Semua transaksi",
            TransactionFilter::Income => "Pemasukan",
            TransactionFilter::Expense => "Pengeluaran",
        }
    }
}

/// Finance ledger row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub description: String,
    /// Signed amount in IDR; expenses are negative.
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
}

/// Totals shown on the finance page cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels_are_indonesian() {
        assert_eq!(TransactionFilter::All.display_name(), "Semua transaksi");
        assert_eq!(TransactionFilter::Expense.display_name(), "Pengeluaran");
    }
}
