// @zen-component: AUTH-RouteGuard
//
//! Route guard: gates protected screens behind a valid session.
//!
//! The check is re-run on every render: a session can expire while a screen
//! is already showing.

use std::sync::Arc;

use crate::navigation::Navigator;
use crate::routes::Route;
use crate::session::SessionStore;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session valid; render the protected content.
    Render,
    /// Session invalid; it was torn down and the navigator sent to login.
    Redirected,
}

/// Wraps protected screens.
#[derive(Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Check the session. On an invalid session: logout, then replace the
    /// current history entry with the login route.
    pub fn check(&self) -> GuardDecision {
        if self.session.is_valid() {
            return GuardDecision::Render;
        }

        log::info!("session missing or expired, redirecting to login");
        self.session.logout();
        self.navigator.replace(Route::Login);
        GuardDecision::Redirected
    }

    /// Render `children` only when the session is valid.
    pub fn render<T>(&self, children: impl FnOnce() -> T) -> Option<T> {
        match self.check() {
            GuardDecision::Render => Some(children()),
            GuardDecision::Redirected => None,
        }
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("session", &self.session)
            .field("current", &self.navigator.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::navigation::History;
    use crate::session::token::encode_unsigned;
    use crate::storage::MemoryStorage;

    /// Navigator that records every call.
    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<(&'static str, Route)>>,
    }

    impl Navigator for RecordingNavigator {
        fn current(&self) -> Route {
            Route::Dashboard
        }

        fn push(&self, route: Route) {
            self.calls.lock().unwrap().push(("push", route));
        }

        fn replace(&self, route: Route) {
            self.calls.lock().unwrap().push(("replace", route));
        }
    }

    fn guard_with(token: Option<&str>) -> (Arc<SessionStore>, Arc<RecordingNavigator>, RouteGuard) {
        let session = Arc::new(SessionStore::open(Arc::new(MemoryStorage::new())));
        if let Some(token) = token {
            session.set_token(token).unwrap();
        }
        let navigator = Arc::new(RecordingNavigator::default());
        let guard = RouteGuard::new(session.clone(), navigator.clone());
        (session, navigator, guard)
    }

    #[test]
    fn valid_session_renders_children_without_navigation() {
        let token = encode_unsigned(&json!({"sub": 1, "exp": 9_999_999_999_i64}));
        let (_, navigator, guard) = guard_with(Some(&token));

        assert_eq!(guard.render(|| "protected"), Some("protected"));
        assert!(navigator.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_session_redirects_once_and_hides_children() {
        let (_, navigator, guard) = guard_with(None);
        let mut rendered = false;

        let out = guard.render(|| rendered = true);

        assert!(out.is_none());
        assert!(!rendered);
        assert_eq!(
            *navigator.calls.lock().unwrap(),
            vec![("replace", Route::Login)]
        );
    }

    #[test]
    fn expired_session_is_torn_down() {
        let token = encode_unsigned(&json!({"sub": 1, "exp": 1}));
        let (session, navigator, guard) = guard_with(Some(&token));
        session.add_admin_id(crate::session::AdminId::new("1"));

        assert_eq!(guard.check(), GuardDecision::Redirected);
        assert_eq!(session.token(), None);
        assert_eq!(session.admin_id(), None);
        assert_eq!(navigator.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn malformed_session_redirects() {
        let (_, _, guard) = guard_with(Some("not-a-token"));
        assert_eq!(guard.check(), GuardDecision::Redirected);
    }

    #[test]
    fn check_reruns_on_every_render() {
        let token = encode_unsigned(&json!({"sub": 1, "exp": 9_999_999_999_i64}));
        let (session, navigator, guard) = guard_with(Some(&token));

        assert_eq!(guard.check(), GuardDecision::Render);

        // Session disappears while the screen is showing.
        session.logout();
        assert_eq!(guard.check(), GuardDecision::Redirected);
        assert_eq!(navigator.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn redirect_replaces_protected_entry_in_history() {
        let session = Arc::new(SessionStore::open(Arc::new(MemoryStorage::new())));
        let history = Arc::new(History::new(Route::Dashboard));
        history.push(Route::Orders);
        let guard = RouteGuard::new(session, history.clone());

        guard.check();

        assert_eq!(
            history.entries_snapshot(),
            vec![Route::Dashboard, Route::Login]
        );
    }
}
