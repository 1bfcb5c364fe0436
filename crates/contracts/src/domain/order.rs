use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Diproses",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
        }
    }
}

/// Status filter for the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderFilter {
    pub fn code(self) -> &'static str {
        match self {
            OrderFilter::All => "all",
            OrderFilter::Pending => "pending",
            OrderFilter::Processing => "processing",
            OrderFilter::Completed => "completed",
            OrderFilter::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(OrderFilter::All),
            "pending" => Some(OrderFilter::Pending),
            "processing" => Some(OrderFilter::Processing),
            "completed" => Some(OrderFilter::Completed),
            "cancelled" => Some(OrderFilter::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> [OrderFilter; 5] {
        [
            OrderFilter::All,
            OrderFilter::Pending,
            OrderFilter::Processing,
            OrderFilter::Completed,
            OrderFilter::Cancelled,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OrderFilter::All => "Semua pesanan",
            OrderFilter::Pending => "Pending",
            OrderFilter::Processing => "Diproses",
            OrderFilter::Completed => "Selesai",
            OrderFilter::Cancelled => "Dibatalkan",
        }
    }
}

/// Order row on the admin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    pub customer: String,
    pub items: u32,
    /// Order total in IDR.
    pub total: f64,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// Aggregated counters for the order page header cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: u64,
    pub pending: u64,
    pub processing: u64,
    pub completed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_filter_labels_are_indonesian() {
        assert_eq!(OrderStatus::Processing.display_name(), "Diproses");
        assert_eq!(OrderFilter::All.display_name(), "Semua pesanan");
        assert_eq!(OrderFilter::Cancelled.display_name(), "Dibatalkan");
    }
}
