use crate::shared::api_utils::rpc;
use contracts::domain::delivery::DailyReport;
use contracts::shared::errors::GatewayError;
use serde_json::json;

/// Daily courier reports, newest first. The list is small (one row per
/// courier per day), so it is not paginated.
pub async fn list_daily_reports() -> Result<Vec<DailyReport>, GatewayError> {
    rpc("get_daily_reports", &json!({})).await
}
