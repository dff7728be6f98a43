//! # sky_api_client
//!
//! HTTP client for the SkyVenda admin API.
//!
//! All backend access goes through one [`ApiClient`]; the endpoint modules
//! are thin wrappers that build requests on it. Resource payloads are
//! returned as `serde_json::Value` unless a screen needs typed fields.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
