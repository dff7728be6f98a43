use sky_api_client::ApiError;
use sky_core::config::ConfigError;
use sky_core::storage::StorageError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    /// The session is missing, expired or was rejected by the server.
    #[error("Please log in: run `sky_cli login --username <name>`")]
    LoginRequired,

    #[error("{}", .0)]
    Api(#[from] ApiError),

    #[error("{}", .0)]
    Config(#[from] ConfigError),

    #[error("{}", .0)]
    Storage(#[from] StorageError),

    #[error("Json::{:?}: {}", .0, .0)]
    Json(#[from] serde_json::Error),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
