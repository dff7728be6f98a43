//! Wiring shared by every command.

use std::sync::Arc;

use sky_api_client::ApiClient;
use sky_core::config::AdminConfig;
use sky_core::guard::RouteGuard;
use sky_core::navigation::{History, Navigator};
use sky_core::session::{AdminId, SessionStore};
use sky_core::storage::{FileStorage, MemoryStorage, TokenStorage};

use crate::Result;
use crate::cli::Cli;

/// Storage key of the panel theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key of admin IDs created from this machine (JSON array).
pub const KNOWN_ADMINS_KEY: &str = "admin_ids";

pub struct AppContext {
    pub storage: Arc<dyn TokenStorage>,
    pub session: Arc<SessionStore>,
    pub history: Arc<History>,
    pub client: Arc<ApiClient>,
    pub guard: RouteGuard,
}

impl AppContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = AdminConfig::from_env_with(cli.api_url.as_deref(), cli.data_dir.clone())?;

        let storage: Arc<dyn TokenStorage> = if cli.ephemeral {
            Arc::new(MemoryStorage::new())
        } else {
            let file = FileStorage::new(&config.data_dir);
            log::debug!("session file: {}", file.path().display());
            Arc::new(file)
        };

        Self::with_storage(&config, storage)
    }

    pub fn with_storage(config: &AdminConfig, storage: Arc<dyn TokenStorage>) -> Result<Self> {
        let session = Arc::new(SessionStore::open(storage.clone()));
        let history = Arc::new(History::default());
        let navigator: Arc<dyn Navigator> = history.clone();

        let client = Arc::new(ApiClient::new(config, session.clone(), navigator.clone())?);
        let guard = RouteGuard::new(session.clone(), navigator);

        Ok(Self {
            storage,
            session,
            history,
            client,
            guard,
        })
    }

    /// Admin IDs remembered from earlier `admins create` runs.
    pub fn known_admins(&self) -> Vec<AdminId> {
        let raw = match self.storage.get(KNOWN_ADMINS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read known admins: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().map(AdminId::new).collect(),
            Err(e) => {
                log::warn!("ignoring malformed known admin list: {e}");
                Vec::new()
            }
        }
    }

    pub fn remember_admin(&self, id: AdminId) -> Result<()> {
        let mut ids = self.known_admins();
        if ids.contains(&id) {
            return Ok(());
        }
        ids.push(id);
        let raw = serde_json::to_string(&ids.iter().map(AdminId::as_str).collect::<Vec<_>>())?;
        self.storage.set(KNOWN_ADMINS_KEY, &raw)?;
        Ok(())
    }

    pub fn forget_admin(&self, id: &AdminId) -> Result<()> {
        let ids = self.known_admins();
        if !ids.contains(id) {
            return Ok(());
        }
        let kept: Vec<&str> = ids.iter().filter(|k| *k != id).map(AdminId::as_str).collect();
        self.storage.set(KNOWN_ADMINS_KEY, &serde_json::to_string(&kept)?)?;
        Ok(())
    }
}
