//! Name-keyed table of built-in agents, as exported to the host.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::PluginConfig;
use crate::error::AgentError;
use crate::interview_prep::{create_interview_prep_agent, interview_prep_metadata};
use crate::types::{AgentConfig, AgentPromptMetadata, validate_temperature};

/// Names of the agents shipped with the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinAgentName {
    InterviewPrep,
}

impl BuiltinAgentName {
    pub const ALL: [BuiltinAgentName; 1] = [Self::InterviewPrep];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InterviewPrep => "interview-prep",
        }
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|n| n.as_str()).collect()
    }

    fn builtin(self) -> &'static BuiltinAgent {
        match self {
            Self::InterviewPrep => &BUILTIN_TABLE[0],
        }
    }
}

impl fmt::Display for BuiltinAgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinAgentName {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| AgentError::UnknownAgent(s.to_string()))
    }
}

/// Construction recipe for one built-in agent.
struct BuiltinAgent {
    name: BuiltinAgentName,
    create: fn(Option<&str>) -> AgentConfig,
    metadata: fn() -> &'static AgentPromptMetadata,
}

static BUILTIN_TABLE: [BuiltinAgent; 1] = [BuiltinAgent {
    name: BuiltinAgentName::InterviewPrep,
    create: create_interview_prep_agent,
    metadata: interview_prep_metadata,
}];

/// Immutable map from agent name to descriptor.
///
/// Serializes as a JSON object keyed by agent name, which is the shape the
/// host loads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AgentRegistry {
    agents: BTreeMap<String, AgentConfig>,
}

static BUILTIN_AGENTS: LazyLock<AgentRegistry> = LazyLock::new(AgentRegistry::builtin);

/// Process-wide registry of built-in agents on their default models.
#[must_use]
pub fn builtin_agents() -> &'static AgentRegistry {
    &BUILTIN_AGENTS
}

impl AgentRegistry {
    /// Builds every built-in agent with its default model.
    #[must_use]
    pub fn builtin() -> Self {
        let agents = BUILTIN_TABLE
            .iter()
            .map(|b| (b.name.as_str().to_string(), (b.create)(None)))
            .collect();
        Self { agents }
    }

    /// Builds every built-in agent, applying user overrides from the plugin
    /// document.
    pub fn with_overrides(config: &PluginConfig) -> Result<Self, AgentError> {
        for key in config.agents.keys() {
            key.parse::<BuiltinAgentName>()?;
        }

        let mut agents = BTreeMap::new();
        for builtin in &BUILTIN_TABLE {
            let name = builtin.name.as_str();
            let ov = config.agent(name);

            let model = ov.and_then(|o| o.model.as_deref());
            let mut agent = (builtin.create)(model);
            if let Some(model) = model {
                tracing::debug!(agent = name, model, "applying model override");
            }
            if let Some(temperature) = ov.and_then(|o| o.temperature) {
                validate_temperature(name, temperature)?;
                tracing::debug!(agent = name, temperature, "applying temperature override");
                agent.temperature = Some(temperature);
            }
            agent.validate(name)?;
            agents.insert(name.to_string(), agent);
        }
        Ok(Self { agents })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.get(name)
    }

    /// Orchestration metadata for a built-in agent.
    #[must_use]
    pub fn metadata(&self, name: &str) -> Option<&'static AgentPromptMetadata> {
        if !self.agents.contains_key(name) {
            return None;
        }
        let builtin = name.parse::<BuiltinAgentName>().ok()?.builtin();
        Some((builtin.metadata)())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentConfig)> {
        self.agents.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Host-facing JSON export of the registry.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
