//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;

/// Location and creation of the plugin config document.
///
/// Implementations report failures as `crate::domain::InstallError` wrapped
/// in `anyhow::Error`.
pub trait ConfigStore {
    /// Absolute path of the config file.
    fn path(&self) -> &Path;

    /// Create the parent directory (and its parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::DirectoryFailed` if the directory cannot be created.
    fn ensure_dir(&self) -> Result<()>;

    /// Whether a config file is already present.
    fn exists(&self) -> bool;

    /// Write `contents` to a new file. Never truncates an existing file.
    ///
    /// Returns `Ok(false)` if the file appeared before it could be created.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::WriteFailed` on any other I/O failure.
    fn create_new(&self, contents: &str) -> Result<bool>;
}
