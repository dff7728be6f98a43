//! Admin login.

use reqwest::Method;
use serde::Deserialize;
use sky_core::routes::Route;
use sky_core::session::{AdminId, decode_claims};

use crate::{ApiClient, ApiError, ApiResult};

/// Minimum username length (after trimming).
pub const MIN_USERNAME_LEN: usize = 3;
/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Login form.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Form checks run before any network call.
    pub fn validate(&self) -> ApiResult<()> {
        if self.username.trim().chars().count() < MIN_USERNAME_LEN {
            return Err(ApiError::Validation(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Log in: exchange credentials for a token, install the session and move
/// to the dashboard.
///
/// A response without `access_token`, or with one that does not decode, is a
/// failed login; no session is installed in that case.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> ApiResult<AdminId> {
    credentials.validate()?;

    let form = [
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
    ];
    let builder = client.request(Method::POST, "/admin/token")?.form(&form);
    let body: TokenResponse = client.execute(builder).await.inspect_err(|e| {
        if let Some(detail) = e.detail() {
            log::info!("login rejected: {detail}");
        }
    })?;

    let token = body
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::TokenMissing)?;
    let claims = decode_claims(&token)?;

    client.establish_session(token, claims.sub.clone())?;
    log::info!("logged in as admin {}", claims.sub);
    client.navigator().push(Route::Dashboard);

    Ok(claims.sub)
}

/// Explicit logout: tear the session down and show the login screen.
pub fn logout(client: &ApiClient) {
    client.session().logout();
    client.navigator().replace(Route::Login);
}
