use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status as seen by the courier.
///
/// Status is the only field the client is allowed to mutate, and only
/// through the status-update RPCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Completed,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Transfer,
}

/// One product line inside a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub product_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One stop on the courier's route for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    pub order_id: i64,
    pub delivery_status: DeliveryStatus,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes_for_courier: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub delivery_date: NaiveDate,
    pub order_details: Vec<OrderDetail>,
}

impl DeliveryItem {
    pub fn is_pending(&self) -> bool {
        self.delivery_status == DeliveryStatus::Pending
    }

    pub fn is_cod(&self) -> bool {
        self.payment_method == PaymentMethod::Cod
    }
}

/// Result of the `batch_update_today_deliveries` RPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateResult {
    pub updated_count: u32,
}

/// End-of-day report submitted by the courier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyReportInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_notes: Option<String>,
    /// Total COD cash collected, required when the route had COD stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cod_collected: Option<f64>,
}

/// Submitted daily report as listed on the admin reports page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub id: i64,
    pub courier_name: String,
    pub report_date: NaiveDate,
    #[serde(default)]
    pub summary_notes: Option<String>,
    #[serde(default)]
    pub total_cod_collected: Option<f64>,
    pub delivered_count: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Broadcast message from the admin to a courier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub message: String,
    pub sent_at: DateTime<Utc>,
}
