//! Product categories.

use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiError, ApiResult};

#[derive(Serialize)]
struct CategoryBody<'a> {
    nome: &'a str,
}

fn category_name(name: &str) -> ApiResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("category name is required".into()));
    }
    Ok(name)
}

pub async fn list(client: &ApiClient) -> ApiResult<Value> {
    client.get_json("/admin/categorias").await
}

pub async fn create(client: &ApiClient, name: &str) -> ApiResult<Value> {
    let nome = category_name(name)?;
    client
        .post_json("/admin/categorias", &CategoryBody { nome })
        .await
}

pub async fn rename(client: &ApiClient, id: &str, name: &str) -> ApiResult<Value> {
    let nome = category_name(name)?;
    client
        .put_json(&format!("/admin/categorias/{id}"), &CategoryBody { nome })
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    client.delete_json(&format!("/admin/categorias/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(category_name("  Electrónicos ").unwrap(), "Electrónicos");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(category_name("   "), Err(ApiError::Validation(_))));
    }
}
