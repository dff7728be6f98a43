// @zen-component: AUTH-SessionStore
//
//! Admin session store.
//!
//! Single owner of the bearer token and the derived admin identity. The token
//! lives in durable storage under [`TOKEN_KEY`]; validity is recomputed from
//! the stored token on every check.

pub mod token;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::storage::{StorageError, TokenStorage};

pub use token::{AdminId, TokenClaims, TokenError, decode_claims};

/// Durable storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    admin_id: Option<AdminId>,
}

/// Current admin session, shared as `Arc<SessionStore>` by the route guard
/// and the API client.
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Rehydrate the session from durable storage.
    ///
    /// The admin ID is re-derived from the stored token when it decodes.
    pub fn open(storage: Arc<dyn TokenStorage>) -> Self {
        let store = Self {
            storage,
            state: Mutex::new(SessionState::default()),
        };

        let token = store.stored_token();
        let admin_id = token
            .as_deref()
            .and_then(|t| decode_claims(t).ok())
            .map(|claims| claims.sub);
        log::debug!(
            "session rehydrated (token: {}, admin: {:?})",
            token.is_some(),
            admin_id
        );

        *store.state() = SessionState { token, admin_id };
        store
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the token from durable storage. Read failures and empty values
    /// count as "no token".
    fn stored_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("failed to read session token: {e}");
                None
            }
        }
    }

    /// Persist `token` and make it the current session token.
    ///
    /// The token's shape is not checked here; see [`SessionStore::is_valid`].
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        self.storage.set(TOKEN_KEY, &token)?;
        self.state().token = Some(token);
        Ok(())
    }

    /// Tear the session down: durable entry removed, memory reset.
    ///
    /// Idempotent. A storage failure is logged and memory is still reset.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            log::warn!("failed to remove session token: {e}");
        }
        let mut state = self.state();
        if state.token.is_some() || state.admin_id.is_some() {
            log::debug!("session cleared");
        }
        *state = SessionState::default();
    }

    /// Record the identity of the logged-in admin (memory only).
    pub fn add_admin_id(&self, id: AdminId) {
        self.state().admin_id = Some(id);
    }

    /// Identity recorded at login or rehydration.
    pub fn admin_id(&self) -> Option<AdminId> {
        self.state().admin_id.clone()
    }

    /// Token currently in durable storage.
    pub fn token(&self) -> Option<String> {
        self.stored_token()
    }

    /// Claims of the stored token, if it decodes.
    pub fn claims(&self) -> Option<TokenClaims> {
        self.stored_token()
            .and_then(|token| decode_claims(&token).ok())
    }

    /// `true` when a stored token decodes and has not expired yet.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Validity at an explicit instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        let Some(token) = self.stored_token() else {
            return false;
        };
        match decode_claims(&token) {
            Ok(claims) => claims.is_live_at(now),
            Err(e) => {
                log::debug!("stored token rejected: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
impl SessionStore {
    fn memory_token(&self) -> Option<String> {
        self.state().token.clone()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("SessionStore")
            .field("has_token", &state.token.is_some())
            .field("admin_id", &state.admin_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};

    const FAR_FUTURE: &str = "h.eyJzdWIiOjEsImV4cCI6OTk5OTk5OTk5OX0.s";

    fn memory_store() -> (Arc<MemoryStorage>, SessionStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::open(storage.clone());
        (storage, store)
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn far_future_token_is_valid_now() {
        let (_, store) = memory_store();
        store.set_token(FAR_FUTURE).unwrap();
        assert!(store.is_valid());
    }

    #[test]
    fn token_expired_in_1970_is_invalid() {
        let (_, store) = memory_store();
        store
            .set_token(token::encode_unsigned(&json!({"sub": 1, "exp": 1})))
            .unwrap();
        assert!(!store.is_valid());
    }

    #[test]
    fn garbage_token_is_invalid() {
        let (_, store) = memory_store();
        store.set_token("not-a-token").unwrap();
        assert!(!store.is_valid());
    }

    #[test]
    fn logout_after_set_token_clears_storage() {
        let (storage, store) = memory_store();
        store.set_token("abc").unwrap();
        store.logout();

        assert!(!store.is_valid());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn validity_follows_the_clock() {
        let (_, store) = memory_store();
        store
            .set_token(token::encode_unsigned(&json!({"sub": 1, "exp": 5_000})))
            .unwrap();

        for t in [0, 1, 4_998, 4_999] {
            assert!(store.is_valid_at(at(t)), "expected valid at {t}");
        }
        for t in [5_000, 5_001, 1_000_000] {
            assert!(!store.is_valid_at(at(t)), "expected invalid at {t}");
        }
    }

    #[test]
    fn malformed_tokens_never_validate() {
        let (_, store) = memory_store();
        let samples = [
            "",
            ".",
            "..",
            "a.b.c",
            "h..s",
            "h.%%%%.s",
            // null
            "h.bnVsbA.s",
            // []
            "h.W10.s",
            // {"sub":1}
            "h.eyJzdWIiOjF9.s",
            // {"exp":9999999999}
            "h.eyJleHAiOjk5OTk5OTk5OTl9.s",
        ];
        for sample in samples {
            store.set_token(sample).unwrap();
            assert!(!store.is_valid(), "{sample:?} should be invalid");
        }
    }

    #[test]
    fn double_logout_matches_single_logout() {
        let (storage, store) = memory_store();
        store.set_token(FAR_FUTURE).unwrap();
        store.add_admin_id(AdminId::new("1"));

        store.logout();
        store.logout();

        assert_eq!(store.token(), None);
        assert_eq!(store.memory_token(), None);
        assert_eq!(store.admin_id(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_when_never_logged_in_is_a_noop() {
        let (storage, store) = memory_store();
        store.logout();
        assert!(storage.is_empty());
        assert!(!store.is_valid());
    }

    #[test]
    fn validity_reads_storage_not_memory() {
        let (storage, store) = memory_store();
        store.set_token(FAR_FUTURE).unwrap();

        // Another handle tears the session down behind our back.
        storage.remove(TOKEN_KEY).unwrap();

        assert_eq!(store.memory_token().as_deref(), Some(FAR_FUTURE));
        assert!(!store.is_valid());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn open_rehydrates_token_and_admin_id() {
        let dir = tempfile::tempdir().unwrap();
        let token = token::encode_unsigned(&json!({"sub": 42, "exp": 9_999_999_999_i64}));
        {
            let store = SessionStore::open(Arc::new(FileStorage::new(dir.path())));
            store.set_token(token.clone()).unwrap();
        }

        let store = SessionStore::open(Arc::new(FileStorage::new(dir.path())));
        assert_eq!(store.memory_token(), Some(token));
        assert_eq!(store.admin_id(), Some(AdminId::new("42")));
        assert!(store.is_valid());
    }

    #[test]
    fn open_with_garbage_token_has_no_admin_id() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "garbage").unwrap();

        let store = SessionStore::open(storage);
        assert_eq!(store.memory_token().as_deref(), Some("garbage"));
        assert_eq!(store.admin_id(), None);
    }

    #[test]
    fn empty_stored_token_counts_as_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "").unwrap();

        let store = SessionStore::open(storage);
        assert_eq!(store.token(), None);
        assert!(!store.is_valid());
    }

    #[test]
    fn add_admin_id_is_memory_only() {
        let (storage, store) = memory_store();
        store.add_admin_id(AdminId::new("9"));
        assert_eq!(store.admin_id(), Some(AdminId::new("9")));
        assert!(storage.is_empty());
    }
}
