//! Plugin configuration document (`~/.config/opencode/oh-my-resume.json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interview_prep::DEFAULT_MODEL;
use crate::registry::BuiltinAgentName;

/// JSON schema advertised in generated documents.
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/goalSetter09/oh-my-resume/main/assets/oh-my-resume.schema.json";

/// File name of the plugin document inside the host config directory.
pub const CONFIG_FILE_NAME: &str = "oh-my-resume.json";

/// Host config directory, relative to the user's home.
pub const CONFIG_DIR: [&str; 2] = [".config", "opencode"];

/// Top-level plugin document read by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Per-agent customisation keyed by agent name.
    #[serde(default)]
    pub agents: BTreeMap<String, AgentOverride>,
}

/// User customisation for one built-in agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl PluginConfig {
    /// Document written by `oh-my-resume install`.
    #[must_use]
    pub fn default_document() -> Self {
        let mut agents = BTreeMap::new();
        agents.insert(
            BuiltinAgentName::InterviewPrep.as_str().to_string(),
            AgentOverride {
                model: Some(DEFAULT_MODEL.to_string()),
                temperature: None,
            },
        );
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            agents,
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Parses a plugin document.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Override for `name`, if the user configured one.
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&AgentOverride> {
        self.agents.get(name)
    }
}
