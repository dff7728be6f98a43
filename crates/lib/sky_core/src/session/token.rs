//! Bearer token payload decoding.
//!
//! Tokens are JWT-shaped (`header.payload.signature`). Only the payload is
//! read here; the signature is checked by the backend on every request.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token decoding errors.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token error: expected 3 segments, found {0}")]
    Segments(usize),

    #[error("Token error: payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token error: payload is not a claims object: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("Token error: expiry {0} is out of range")]
    Expiry(i64),
}

/// Identifier of the authenticated admin (the token's `sub` claim).
///
/// The backend emits it as a number; string subjects are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSubject")]
pub struct AdminId(String);

impl AdminId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubject {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawSubject> for AdminId {
    fn from(raw: RawSubject) -> Self {
        match raw {
            RawSubject::Number(n) => Self(n.to_string()),
            RawSubject::Text(s) => Self(s),
        }
    }
}

/// Claims read from the token payload. Unknown claims are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the admin ID.
    pub sub: AdminId,
    /// Expiry (unix timestamp, seconds).
    pub exp: i64,
}

impl TokenClaims {
    /// Expiry as a UTC instant, `None` when `exp` is outside chrono's range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// `true` when `now` is strictly before the expiry.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| now < exp)
    }
}

/// Decode the claims of a `header.payload.signature` token without
/// verifying the signature.
///
/// The payload may use the URL-safe or the standard base64 alphabet, with or
/// without padding.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }

    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)?;

    if claims.expires_at().is_none() {
        return Err(TokenError::Expiry(claims.exp));
    }
    Ok(claims)
}

/// Build an unsigned token carrying `claims`. Used to fabricate sessions in
/// tests and local tooling; the backend rejects such tokens.
pub fn encode_unsigned(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("e30.{payload}.unsigned")
}
