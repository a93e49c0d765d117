//! Infrastructure implementation of the `ConfigStore` port.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Result;
use resume_agents::{CONFIG_DIR, CONFIG_FILE_NAME};

use crate::application::ports::ConfigStore;
use crate::domain::InstallError;

/// Production implementation of `ConfigStore` backed by a JSON file in the
/// opencode config directory.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Store at `<home>/.config/opencode/oh-my-resume.json`.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::HomeNotFound` if the home directory cannot be determined.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(InstallError::HomeNotFound)?;
        Ok(Self::in_home(&home))
    }

    /// Store under an explicit home directory.
    #[must_use]
    pub fn in_home(home: &Path) -> Self {
        let dir = CONFIG_DIR.iter().fold(home.to_path_buf(), |p, c| p.join(c));
        Self {
            path: dir.join(CONFIG_FILE_NAME),
        }
    }
}

impl ConfigStore for JsonConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if dir.is_dir() {
            return Ok(());
        }
        tracing::debug!(dir = %dir.display(), "creating config directory");
        std::fs::create_dir_all(dir).map_err(|e| InstallError::DirectoryFailed {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn create_new(&self, contents: &str) -> Result<bool> {
        let write_failed = |e: std::io::Error| InstallError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        };
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(write_failed(e).into()),
        };
        file.write_all(contents.as_bytes()).map_err(write_failed)?;
        file.sync_all().map_err(write_failed)?;
        Ok(true)
    }
}
