//! Install outcome and the guidance printed after a fresh install.

use std::path::{Path, PathBuf};

/// Plugin name the host expects in its `plugin` list.
pub const PLUGIN_NAME: &str = "oh-my-resume";

/// Follow-up steps shown after the config is created.
pub const NEXT_STEPS: [&str; 2] = [
    "Add 'oh-my-resume' to your opencode.json plugins",
    "Customize agents in oh-my-resume.json if needed",
];

/// Result of `oh-my-resume install`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A fresh default config was written.
    Created { path: PathBuf },
    /// A config was already present and was left untouched.
    AlreadyExists { path: PathBuf },
}

impl InstallOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path } | Self::AlreadyExists { path } => path,
        }
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Minimal `opencode.json` that enables the plugin.
#[must_use]
pub fn host_config_example() -> String {
    format!(r#"{{ "plugin": ["{PLUGIN_NAME}"] }}"#)
}
