//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator, so callers can `downcast_ref` to tell them apart.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while materialising the plugin config on disk.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Cannot determine home directory. Set $HOME and retry.")]
    HomeNotFound,

    #[error("cannot create config directory {}: {reason}", path.display())]
    DirectoryFailed { path: PathBuf, reason: String },

    #[error("configuration write failed for {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("cannot serialize default config: {0}")]
    Serialize(String),
}
