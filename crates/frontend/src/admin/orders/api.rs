use crate::shared::api_utils::rpc;
use contracts::domain::order::{OrderFilter, OrderStats, OrderSummary};
use contracts::shared::errors::GatewayError;
use contracts::shared::listing::{ListPage, ListQuery};
use serde_json::json;

pub async fn list_orders(
    query: ListQuery<OrderFilter>,
) -> Result<ListPage<OrderSummary>, GatewayError> {
    query.validate()?;
    rpc(
        "get_orders_paginated",
        &json!({
            "p_page": query.page,
            "p_limit": query.limit,
            "p_search": query.search,
            "p_sort_by": query.sort_by,
            "p_sort_order": query.sort_order.as_str(),
            "p_filter": query.filter.code(),
        }),
    )
    .await
}

pub async fn get_order_stats() -> Result<OrderStats, GatewayError> {
    rpc("get_order_stats", &json!({})).await
}
