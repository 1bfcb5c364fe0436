use crate::shared::api_utils::{rpc, rpc_unit};
use contracts::domain::customer::{ActivityFilter, Customer, CustomerInput};
use contracts::shared::errors::GatewayError;
use contracts::shared::listing::{ListPage, ListQuery};
use serde_json::json;

pub async fn list_customers(
    query: ListQuery<ActivityFilter>,
) -> Result<ListPage<Customer>, GatewayError> {
    query.validate()?;
    rpc(
        "get_customers_paginated",
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

pub async fn create_customer(input: &CustomerInput) -> Result<Customer, GatewayError> {
    rpc("create_customer", &json!({ "p_data": input })).await
}

pub async fn update_customer(id: i64, input: &CustomerInput) -> Result<Customer, GatewayError> {
    rpc("update_customer", &json!({ "p_id": id, "p_data": input })).await
}

/// Customers are never hard-deleted; "delete" flips the active flag so
/// order history keeps its reference.
pub async fn set_customer_active(id: i64, active: bool) -> Result<(), GatewayError> {
    rpc_unit(
        "set_customer_active",
        &json!({ "p_id": id, "p_active": active }),
    )
    .await
}
