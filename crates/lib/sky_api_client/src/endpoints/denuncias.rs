//! Product reports ("denúncias") filed by buyers.

use serde_json::Value;

use crate::{ApiClient, ApiResult};

pub async fn list(client: &ApiClient) -> ApiResult<Value> {
    client.get_json("/admin/denuncia_produtos").await
}

/// Dismiss a report.
pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    client
        .delete_json(&format!("/admin/denuncia_produtos/{id}"))
        .await
}
