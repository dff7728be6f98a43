//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Production backend.
pub const DEFAULT_API_URL: &str = "https://skyvendamz-production.up.railway.app";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL {0:?}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Invalid API URL {0:?}: only http and https are supported")]
    UnsupportedScheme(String),

    #[error("Invalid timeout {0:?}")]
    InvalidTimeout(String),

    #[error("No data directory available; set SKY_DATA_DIR")]
    NoDataDir,
}

/// Configuration for the admin client.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    /// Backend base URL.
    pub api_url: Url,
    /// Directory holding the durable session file.
    pub data_dir: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AdminConfig {
    /// Reads configuration from environment variables with sensible defaults.
    /// Explicit values (command-line flags) take precedence over the
    /// environment.
    ///
    /// | Variable                | Default                                          |
    /// |-------------------------|--------------------------------------------------|
    /// | `SKY_API_URL`           | `https://skyvendamz-production.up.railway.app`   |
    /// | `SKY_DATA_DIR`          | `$APP_DATA/sky-admin`                            |
    /// | `SKY_HTTP_TIMEOUT_SECS` | `30`                                             |
    pub fn from_env_with(
        api_url: Option<&str>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_url = match api_url {
            Some(url) => url.to_string(),
            None => std::env::var("SKY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
        };
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match std::env::var("SKY_DATA_DIR") {
                Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => default_data_dir().ok_or(ConfigError::NoDataDir)?,
            },
        };
        let timeout = match std::env::var("SKY_HTTP_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self::new(&api_url, data_dir, timeout)
    }

    /// Build a config from explicit values.
    pub fn new(api_url: &str, data_dir: PathBuf, timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url(api_url)?,
            data_dir,
            timeout,
        })
    }
}

/// Platform data directory for the client: `$APP_DATA/sky-admin`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("sky-admin"))
}

/// Parse and check a backend base URL.
pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

/// Parse a timeout given in whole seconds. Zero is rejected.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_parses() {
        let url = parse_api_url(DEFAULT_API_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            parse_api_url("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            parse_api_url("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn timeout_must_be_positive_seconds() {
        assert_eq!(parse_timeout("15").unwrap(), Duration::from_secs(15));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn explicit_config() {
        let config = AdminConfig::new(
            "http://127.0.0.1:8000",
            PathBuf::from("/tmp/sky"),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn explicit_values_override_environment() {
        let config = AdminConfig::from_env_with(
            Some("https://staging.example.mz"),
            Some(PathBuf::from("/tmp/sky-staging")),
        )
        .unwrap();
        assert_eq!(config.api_url.host_str(), Some("staging.example.mz"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sky-staging"));
    }
}
