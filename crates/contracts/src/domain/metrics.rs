use serde::{Deserialize, Serialize};

/// Aggregated counters for the admin dashboard, computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub customers_total: u64,
    pub orders_total: u64,
    pub orders_pending: u64,
    pub deliveries_today: u64,
    pub deliveries_pending_today: u64,
    /// Revenue for the current month, IDR.
    pub revenue_month: f64,
}
