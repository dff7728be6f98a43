//! Navigation between panel routes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::routes::Route;

/// Moves the panel between routes.
///
/// Shared as `Arc<dyn Navigator>` by the route guard, the API client and the
/// screens.
pub trait Navigator: Send + Sync {
    /// Route currently shown.
    fn current(&self) -> Route;

    /// Navigate to `route`, keeping the current entry in history.
    fn push(&self, route: Route);

    /// Navigate to `route`, replacing the current history entry.
    fn replace(&self, route: Route);
}

/// In-memory history stack.
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    /// History with a single entry.
    pub fn new(start: Route) -> Self {
        Self {
            entries: Mutex::new(vec![start]),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Route>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the whole stack, oldest first.
    pub fn entries_snapshot(&self) -> Vec<Route> {
        self.entries().clone()
    }

}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator for History {
    fn current(&self) -> Route {
        self.entries().last().cloned().unwrap_or(Route::Login)
    }

    fn push(&self, route: Route) {
        log::debug!("navigate push {route}");
        self.entries().push(route);
    }

    fn replace(&self, route: Route) {
        log::debug!("navigate replace {route}");
        let mut entries = self.entries();
        entries.pop();
        entries.push(route);
    }
}
