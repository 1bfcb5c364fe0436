use crate::shared::api_utils::{rpc, rpc_unit};
use contracts::domain::metrics::DashboardMetrics;
use contracts::shared::errors::GatewayError;
use serde_json::json;

pub async fn get_dashboard_metrics() -> Result<DashboardMetrics, GatewayError> {
    rpc("get_dashboard_metrics", &json!({})).await
}

/// Broadcast a short message to couriers currently on the road.
pub async fn send_courier_alert(message: &str) -> Result<(), GatewayError> {
    rpc_unit("send_courier_alert", &json!({ "p_message": message })).await
}
