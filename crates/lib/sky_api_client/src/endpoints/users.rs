//! Marketplace users: listings, verification review, activation.

use reqwest::Method;
use serde_json::Value;

use crate::{ApiClient, ApiError, ApiResult};

/// Default products page size of the user detail screen.
pub const PRODUCTS_PAGE_SIZE: u32 = 10;

/// Which user listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilter {
    All,
    Verified,
    Unverified,
    Pending,
}

impl UserFilter {
    fn path(self) -> &'static str {
        match self {
            UserFilter::All => "/admin/usuarios/",
            UserFilter::Verified => "/admin/usuarios/verificados/",
            UserFilter::Unverified => "/admin/usuarios/nao_verificados/",
            // Path spelling is the backend's.
            UserFilter::Pending => "/admin/usuarios/pendetes/",
        }
    }
}

/// Outcome of a verification review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
}

pub async fn list(client: &ApiClient, filter: UserFilter) -> ApiResult<Value> {
    client.get_json(filter.path()).await
}

/// Extract the user array from a listing response. The "all users" listing
/// wraps it as `{"usuarios": [...]}`; the others return a bare array.
pub fn user_rows(listing: &Value) -> Vec<Value> {
    match listing {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map
            .get("usuarios")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Find a user by ID in a listing (IDs may be numbers or strings).
pub fn find_user(listing: &Value, user_id: &str) -> Option<Value> {
    user_rows(listing).into_iter().find(|user| match user.get("id") {
        Some(Value::Number(n)) => n.to_string() == user_id,
        Some(Value::String(s)) => s == user_id,
        _ => false,
    })
}

/// One page of a user's products (`{"total", "produtos", "limit"}`).
pub async fn products(
    client: &ApiClient,
    user_id: &str,
    page: u32,
    limit: u32,
) -> ApiResult<Value> {
    client
        .get_json_with_query(
            &format!("/admin/{user_id}/produtos/"),
            &[("page", page.max(1)), ("limit", limit.max(1))],
        )
        .await
}

pub async fn transactions(client: &ApiClient, user_id: &str) -> ApiResult<Value> {
    client
        .get_json(&format!("/admin/{user_id}/transacoes/"))
        .await
}

pub async fn set_active(client: &ApiClient, user_id: &str, active: bool) -> ApiResult<Value> {
    let action = if active { "ativar" } else { "desativar" };
    let builder = client.request(Method::PUT, &format!("/admin/usuario/{user_id}/{action}"))?;
    client.execute(builder).await
}

/// Approve or reject a pending verification. Rejections need a reason.
pub async fn review(
    client: &ApiClient,
    user_id: &str,
    decision: &ReviewDecision,
) -> ApiResult<Value> {
    let path = format!("/admin/usuario/{user_id}/revisao");
    let builder = client.request(Method::PUT, &path)?;
    let builder = match decision {
        ReviewDecision::Approve => builder.query(&[("nova_revisao", "sim")]),
        ReviewDecision::Reject { reason } => {
            let reason = reason.trim();
            if reason.is_empty() {
                return Err(ApiError::Validation(
                    "a reason is required to reject a user".into(),
                ));
            }
            builder.query(&[("nova_revisao", "nao"), ("motivo", reason)])
        }
    };
    client.execute(builder).await
}

pub async fn delete(client: &ApiClient, user_id: &str) -> ApiResult<Value> {
    client
        .delete_json(&format!("/admin/delete/user/{user_id}"))
        .await
}

/// Public URL of an uploaded identity document.
pub fn document_url(client: &ApiClient, file_name: &str) -> ApiResult<url::Url> {
    client.url(&format!("/documentos/{file_name}"))
}

/// Identity document file names of a user (`info_usuario.foto_*`).
pub fn document_photos(user: &Value) -> Vec<(&'static str, String)> {
    let info = user.get("info_usuario");
    ["foto_retrato", "foto_bi_frente", "foto_bi_verso"]
        .into_iter()
        .filter_map(|field| {
            info.and_then(|i| i.get(field))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(|s| (field, s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rows_from_wrapped_and_bare_listings() {
        let wrapped = json!({"total_usuarios": 2, "usuarios": [{"id": 1}, {"id": 2}]});
        assert_eq!(user_rows(&wrapped).len(), 2);

        let bare = json!([{"id": 1}]);
        assert_eq!(user_rows(&bare).len(), 1);

        assert!(user_rows(&json!({"usuarios": "nope"})).is_empty());
        assert!(user_rows(&json!(null)).is_empty());
    }

    #[test]
    fn finds_users_by_numeric_or_string_id() {
        let listing = json!([{"id": 7, "nome": "Ana"}, {"id": "x9", "nome": "Rui"}]);
        assert_eq!(find_user(&listing, "7").unwrap()["nome"], "Ana");
        assert_eq!(find_user(&listing, "x9").unwrap()["nome"], "Rui");
        assert!(find_user(&listing, "8").is_none());
    }

    #[test]
    fn document_photos_skip_missing_entries() {
        let user = json!({
            "id": 1,
            "info_usuario": {"foto_retrato": "r.jpg", "foto_bi_frente": "", "foto_bi_verso": null}
        });
        assert_eq!(
            document_photos(&user),
            vec![("foto_retrato", "r.jpg".to_string())]
        );
        assert!(document_photos(&json!({"id": 2})).is_empty());
    }
}
