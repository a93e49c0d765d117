//! Application service: install the default plugin config.

use anyhow::Result;
use resume_agents::PluginConfig;

use crate::application::ports::ConfigStore;
use crate::domain::{InstallError, InstallOutcome};

/// Materialise the default plugin config unless one already exists.
///
/// An existing file is never modified.
///
/// # Errors
///
/// Returns an `InstallError` if the directory or file cannot be created.
pub fn install(store: &impl ConfigStore) -> Result<InstallOutcome> {
    store.ensure_dir()?;
    let path = store.path().to_path_buf();

    if store.exists() {
        tracing::info!(path = %path.display(), "config already exists, leaving it untouched");
        return Ok(InstallOutcome::AlreadyExists { path });
    }

    let contents = PluginConfig::default_document()
        .to_pretty_json()
        .map_err(|e| InstallError::Serialize(e.to_string()))?;

    if store.create_new(&contents)? {
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(InstallOutcome::Created { path })
    } else {
        tracing::warn!(path = %path.display(), "config appeared during install, leaving it untouched");
        Ok(InstallOutcome::AlreadyExists { path })
    }
}
