//! Courier-facing remote procedures. Every call authenticates with the
//! per-courier link token, never a session.

use crate::shared::api_utils::{rpc, rpc_unit};
use contracts::domain::delivery::{
    AlertMessage, BatchUpdateResult, DailyReportInput, DeliveryItem, DeliveryStatus,
};
use contracts::shared::errors::GatewayError;
use serde_json::json;

pub async fn get_deliveries(token: &str) -> Result<Vec<DeliveryItem>, GatewayError> {
    rpc("get_deliveries_for_courier", &json!({ "p_token": token })).await
}

pub async fn update_delivery_status(
    token: &str,
    order_id: i64,
    status: DeliveryStatus,
) -> Result<(), GatewayError> {
    rpc_unit(
        "update_delivery_status",
        &json!({
            "p_token": token,
            "p_order_id": order_id,
            "p_status": status.as_str(),
        }),
    )
    .await
}

pub async fn batch_complete_today(token: &str) -> Result<BatchUpdateResult, GatewayError> {
    rpc(
        "batch_update_today_deliveries",
        &json!({ "p_token": token, "p_status": DeliveryStatus::Completed.as_str() }),
    )
    .await
}

pub async fn submit_daily_report(
    token: &str,
    report: &DailyReportInput,
) -> Result<(), GatewayError> {
    rpc_unit(
        "submit_daily_report",
        &json!({ "p_token": token, "p_report": report }),
    )
    .await
}

/// Latest admin broadcast, as a zero-or-one element list so that "no
/// alert" is an empty success rather than a null payload.
pub async fn get_latest_alert(token: &str) -> Result<Option<AlertMessage>, GatewayError> {
    let alerts: Vec<AlertMessage> = rpc("get_latest_alert", &json!({ "p_token": token })).await?;
    Ok(alerts.into_iter().next())
}
