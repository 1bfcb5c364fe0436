use crate::shared::api_utils::rpc;
use contracts::domain::transaction::{FinanceTotals, Transaction, TransactionFilter};
use contracts::shared::errors::GatewayError;
use contracts::shared::listing::{ListPage, ListQuery};
use serde_json::json;

pub async fn list_transactions(
    query: ListQuery<TransactionFilter>,
) -> Result<ListPage<Transaction>, GatewayError> {
    query.validate()?;
    rpc(
        "get_transactions_paginated",
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

pub async fn get_finance_totals() -> Result<FinanceTotals, GatewayError> {
    rpc("get_finance_totals", &json!({})).await
}
