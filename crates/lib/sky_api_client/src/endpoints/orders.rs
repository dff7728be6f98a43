//! Marketplace orders.

use serde::Deserialize;
use serde_json::Value;

use crate::{ApiClient, ApiError, ApiResult};

/// Orders per page.
pub const ORDERS_PAGE_SIZE: u64 = 10;

/// One page of `/admin/listar-pedidos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrdersPage {
    pub total: u64,
    pub pedidos: Vec<Value>,
}

impl OrdersPage {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(ORDERS_PAGE_SIZE)
    }
}

/// Offset of page `page` (1-based; 0 is treated as 1).
fn page_offset(page: u64) -> ApiResult<u64> {
    (page.max(1) - 1)
        .checked_mul(ORDERS_PAGE_SIZE)
        .ok_or_else(|| ApiError::Validation(format!("page {page} is out of range")))
}

/// Fetch page `page` (1-based; 0 is treated as 1).
pub async fn list(client: &ApiClient, page: u64) -> ApiResult<OrdersPage> {
    let skip = page_offset(page)?;
    let page: Option<OrdersPage> = client
        .get_json_with_query(
            "/admin/listar-pedidos",
            &[("skip", skip), ("limit", ORDERS_PAGE_SIZE)],
        )
        .await?;
    Ok(page.unwrap_or_default())
}

/// Filter a fetched page: exact `status` match, and a case-insensitive
/// `search` on the buyer's or the product's name. Empty filters match all.
pub fn filter_orders<'a>(
    orders: &'a [Value],
    status: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Value> {
    let status = status.filter(|s| !s.is_empty());
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    orders
        .iter()
        .filter(|order| {
            status.is_none_or(|s| order.get("status").and_then(Value::as_str) == Some(s))
        })
        .filter(|order| {
            let Some(needle) = &needle else {
                return true;
            };
            ["comprador", "produto"].iter().any(|key| {
                order
                    .get(key)
                    .and_then(|v| v.get("nome"))
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.to_lowercase().contains(needle))
            })
        })
        .collect()
}
