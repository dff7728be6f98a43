//! Durable key/value storage for the admin session.
//!
//! Plays the role browser local storage plays for a web panel: a handful of
//! string keys that survive process restarts.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage persist error: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// String key/value store shared by the session store and preferences.
///
/// Every `get` must observe writes made by other handles (or other
/// processes) to the same backing store.
pub trait TokenStorage: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
