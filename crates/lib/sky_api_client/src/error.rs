//! Client error types.

use sky_core::session::TokenError;
use sky_core::storage::StorageError;
use thiserror::Error;

/// Convenience alias for client return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to the screens.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been torn down.
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or("session rejected by the server"))]
    Unauthorized { detail: Option<String> },

    /// Any other non-success status, passed through untouched.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    #[error("Offline: could not reach the server ({0})")]
    Offline(String),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Login failed: token missing in login response")]
    TokenMissing,

    #[error("Login failed: {0}")]
    Token(#[from] TokenError),

    #[error("Session storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ApiError::Offline(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// FastAPI-style bodies carry `{"detail": "..."}` or a list of validation
/// entries with `msg` fields.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Credenciais inválidas"}"#).as_deref(),
            Some("Credenciais inválidas")
        );
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"detail":[{"loc":["body","nome"],"msg":"field required"},{"msg":"too short"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; too short")
        );
    }

    #[test]
    fn no_detail_for_plain_text_or_missing_field() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
    }

    #[test]
    fn display_prefers_detail() {
        let err = ApiError::Status {
            status: 404,
            detail: Some("Usuário não encontrado".into()),
        };
        assert_eq!(err.to_string(), "HTTP 404: Usuário não encontrado");
        assert_eq!(err.status(), Some(404));

        let err = ApiError::Unauthorized { detail: None };
        assert_eq!(
            err.to_string(),
            "Unauthorized: session rejected by the server"
        );
    }
}
