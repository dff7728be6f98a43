//! Panel administrators.

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;
use sky_core::session::AdminId;

use crate::{ApiClient, ApiError, ApiResult};

/// Registration form for a new administrator.
#[derive(Clone, Serialize)]
pub struct NewAdmin {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl NewAdmin {
    /// Build a normalized form: name trimmed, email trimmed and lowercased.
    pub fn new(name: &str, email: &str, password: impl Into<String>) -> Self {
        Self {
            nome: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            senha: password.into(),
        }
    }

    fn validate(&self) -> ApiResult<()> {
        if self.nome.is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }
        if !self.email.contains('@') {
            return Err(ApiError::Validation(format!(
                "invalid email address: {}",
                self.email
            )));
        }
        if self.senha.is_empty() {
            return Err(ApiError::Validation("password is required".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdmin")
            .field("nome", &self.nome)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Editable administrator fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminUpdate {
    pub nome_completo: String,
    pub email: String,
    pub username: String,
}

impl AdminUpdate {
    /// Current values of an admin record, as the edit form starts from.
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| {
            record
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            nome_completo: field("nome_completo"),
            email: field("email"),
            username: field("username"),
        }
    }
}

pub async fn get(client: &ApiClient, id: &str) -> ApiResult<Value> {
    client.get_json(&format!("/admin/{id}")).await
}

/// Register an administrator and return the created record.
pub async fn create(client: &ApiClient, admin: &NewAdmin) -> ApiResult<Value> {
    admin.validate()?;
    let created: Value = client.post_json("/admin/registro", admin).await?;
    if let Some(id) = created.get("id").and_then(id_string) {
        log::info!("created admin {id}");
    }
    Ok(created)
}

pub async fn update(client: &ApiClient, id: &str, update: &AdminUpdate) -> ApiResult<Value> {
    client.put_json(&format!("/admin/admins/{id}"), update).await
}

pub async fn delete(client: &ApiClient, id: &str) -> ApiResult<Value> {
    client.delete_json(&format!("/admin/delete/{id}")).await
}

/// Fetch the logged-in admin plus `known` admins in parallel.
///
/// There is no "list admins" endpoint, so each record is fetched by ID.
/// Records that fail to load are skipped, except for a 401, which ends the
/// session and is returned.
pub async fn list(client: &ApiClient, known: &[AdminId]) -> ApiResult<Vec<Value>> {
    let mut ids: Vec<AdminId> = Vec::with_capacity(known.len() + 1);
    if let Some(claims) = client.session().claims() {
        ids.push(claims.sub);
    }
    for id in known {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    let results = join_all(ids.iter().map(|id| get(client, id.as_str()))).await;

    let mut admins = Vec::with_capacity(results.len());
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(record) => admins.push(record),
            Err(err) if err.status() == Some(401) => return Err(err),
            Err(err) => log::warn!("skipping admin {id}: {err}"),
        }
    }
    Ok(admins)
}

/// Render a JSON `id` (number or string) as a string.
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
