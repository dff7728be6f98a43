//! Throwaway backend for integration tests.
//!
//! Serves a handful of routes shaped like the admin API on `127.0.0.1:0`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Form, Json, Router};
use serde_json::{Value, json};
use sky_api_client::ApiClient;
use sky_core::navigation::{History, Navigator};
use sky_core::routes::Route;
use sky_core::session::SessionStore;
use sky_core::session::token::encode_unsigned;
use sky_core::storage::MemoryStorage;
use url::Url;

pub const GOOD_USER: &str = "admin";
pub const GOOD_PASSWORD: &str = "segredo1";
/// Username for which the token endpoint answers 200 without a token.
pub const TOKENLESS_USER: &str = "semtoken";

/// Long-lived token for admin 7.
pub fn live_token() -> String {
    encode_unsigned(&json!({"sub": 7, "exp": 9_999_999_999_i64}))
}

fn authorization(headers: &HeaderMap) -> Value {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(Value::Null, |v| Value::String(v.to_string()))
}

async fn echo(headers: HeaderMap) -> Json<Value> {
    Json(json!({ "authorization": authorization(&headers) }))
}

async fn token(Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let user = form.get("username").map(String::as_str).unwrap_or_default();
    let pass = form.get("password").map(String::as_str).unwrap_or_default();
    match (user, pass) {
        (GOOD_USER, GOOD_PASSWORD) => (
            StatusCode::OK,
            Json(json!({"access_token": live_token(), "token_type": "bearer"})),
        ),
        (TOKENLESS_USER, _) => (StatusCode::OK, Json(json!({"token_type": "bearer"}))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Credenciais inválidas"})),
        ),
    }
}

async fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Token expirado"})),
    )
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Anúncio não encontrado"})),
    )
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

async fn summary() -> Json<Value> {
    Json(json!({
        "total_usuarios": 42,
        "total_produtos_ativos": 10,
        "total_produtos": 12,
        "saldo_total": 1234.5,
        "usuarios_pro": 3
    }))
}

async fn orders(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "total": 25,
        "pedidos": [{"id": 1, "skip": q.get("skip"), "limit": q.get("limit")}]
    }))
}

async fn revisao(Path(id): Path<String>, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({"id": id, "query": q}))
}

async fn admin(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    match id.as_str() {
        "7" | "8" => (
            StatusCode::OK,
            Json(json!({"id": id, "nome_completo": format!("Admin {id}")})),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Admin não encontrado"})),
        ),
    }
}

async fn revisar_anuncio(Path(id): Path<String>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap_or_default();
        let value = match file_name {
            Some(file) => json!({"file": file, "len": bytes.len()}),
            None => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        };
        fields.insert(name, value);
    }
    Json(json!({"id": id, "fields": fields}))
}

async fn empty_ok() -> StatusCode {
    StatusCode::OK
}

/// Start the backend; returns its base URL.
pub async fn spawn_backend() -> Url {
    let app = Router::new()
        .route("/echo", get(echo))
        .route("/admin/token", post(token))
        .route("/expired", get(unauthorized))
        .route("/missing", get(not_found))
        .route("/boom", get(server_error))
        .route("/admin/sistema/resumo/", get(summary))
        .route("/admin/listar-pedidos", get(orders))
        .route("/admin/usuario/{id}/revisao", put(revisao))
        .route("/admin/usuario/{id}/ativar", put(empty_ok))
        .route("/admin/{id}", get(admin))
        .route("/admin/anuncios/revisar/{id}", put(revisar_anuncio));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    Url::parse(&format!("http://{addr}")).expect("backend url")
}

/// Navigator that never leaves its start route and counts navigations.
#[derive(Debug)]
pub struct CountingNavigator {
    current: Route,
    pub replaces: AtomicUsize,
    pub pushes: AtomicUsize,
}

impl CountingNavigator {
    pub fn on(route: Route) -> Self {
        Self {
            current: route,
            replaces: AtomicUsize::new(0),
            pushes: AtomicUsize::new(0),
        }
    }

    pub fn replace_count(&self) -> usize {
        self.replaces.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn current(&self) -> Route {
        self.current.clone()
    }

    fn push(&self, _route: Route) {
        self.pushes.fetch_add(1, Ordering::SeqCst);
    }

    fn replace(&self, _route: Route) {
        self.replaces.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Fixture {
    pub client: ApiClient,
    pub session: Arc<SessionStore>,
    pub storage: Arc<MemoryStorage>,
}

/// Client against `base` with an empty in-memory session.
pub fn fixture(base: &Url, navigator: Arc<dyn Navigator>) -> Fixture {
    let storage = Arc::new(MemoryStorage::new());
    let session = Arc::new(SessionStore::open(storage.clone()));
    let client = ApiClient::with_http(
        reqwest::Client::new(),
        base.clone(),
        session.clone(),
        navigator,
    );
    Fixture {
        client,
        session,
        storage,
    }
}

/// Same as [`fixture`], on a fresh history starting at `start`.
pub fn fixture_with_history(base: &Url, start: Route) -> (Fixture, Arc<History>) {
    let history = Arc::new(History::new(start));
    (fixture(base, history.clone()), history)
}
