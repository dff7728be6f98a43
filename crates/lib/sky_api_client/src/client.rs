// @zen-component: AUTH-ApiClient
//
//! Shared request pipeline for every backend call.
//!
//! Outgoing requests carry `Authorization: Bearer <token>` when a token is in
//! durable storage. A 401 on any response tears the session down and sends
//! the navigator to login, once per batch of requests that were in flight
//! together.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sky_core::config::AdminConfig;
use sky_core::navigation::Navigator;
use sky_core::routes::Route;
use sky_core::session::{AdminId, SessionStore};
use url::Url;

use crate::error::{ApiError, ApiResult, extract_detail};

/// The single HTTP client shared by all screens.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    /// Number of 401 redirects issued. A request remembers the value it was
    /// sent under; only the first 401 of that generation navigates.
    redirects: AtomicU64,
}

impl ApiClient {
    /// Build the client from configuration.
    pub fn new(
        config: &AdminConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("sky-admin/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_http(http, config.api_url.clone(), session, navigator))
    }

    /// Build the client around an existing `reqwest::Client`.
    pub fn with_http(
        http: reqwest::Client,
        mut base_url: Url,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        // Relative joins must append to the base path, not replace its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http,
            base_url,
            session,
            navigator,
            redirects: AtomicU64::new(0),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Resolve an API path (leading slash optional) against the base URL.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Start a request. The bearer token is read from durable storage here,
    /// so a request built after a teardown never carries the stale token.
    pub fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.url(path)?;
        log::debug!("{method} {url}");

        let builder = self.http.request(method, url);
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send a request through the response pipeline.
    ///
    /// 401 → session teardown + login redirect, returned as
    /// [`ApiError::Unauthorized`]. Other failures are returned unchanged.
    pub async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let generation = self.redirects.load(Ordering::SeqCst);
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized(generation);
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Unauthorized {
                detail: extract_detail(&body),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("request failed with {status}: {body}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        Ok(response)
    }

    /// Send a request and decode its JSON body. An empty body decodes as
    /// JSON `null`.
    pub async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::GET, path)?).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, path)?.query(query))
            .await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path)?.json(body))
            .await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PUT, path)?.json(body))
            .await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::DELETE, path)?).await
    }

    /// Install a freshly issued token.
    pub fn establish_session(&self, token: String, admin_id: AdminId) -> ApiResult<()> {
        self.session.set_token(token)?;
        self.session.add_admin_id(admin_id);
        Ok(())
    }

    /// Number of 401 redirects issued so far.
    pub fn redirect_count(&self) -> u64 {
        self.redirects.load(Ordering::SeqCst)
    }

    /// Teardown is idempotent. Requests sent under the same generation share
    /// one redirect; a request sent after that redirect may redirect again.
    /// No redirect while the login screen is showing.
    fn handle_unauthorized(&self, generation: u64) {
        log::info!("server rejected the session (401), logging out");
        self.session.logout();

        if self.navigator.current().is_login() {
            return;
        }
        if self
            .redirects
            .compare_exchange(generation, generation + 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("login redirect already issued for this batch");
            return;
        }
        self.navigator.replace(Route::Login);
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .field("redirects", &self.redirect_count())
            .finish()
    }
}
