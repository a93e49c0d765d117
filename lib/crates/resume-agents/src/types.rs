//! Agent descriptor and orchestration metadata.
//!
//! Field names on the wire follow the host SDK's `AgentConfig` shape
//! (`camelCase`), so a serialized [`AgentConfig`] can be handed to the host
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::capability::{AgentToolRestrictions, RestrictedTool};
use crate::error::AgentError;

// ── Descriptor ───────────────────────────────────────────────────────────────

/// Whether an agent is only reachable through delegation or can also be
/// selected directly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    Subagent,
    Primary,
}

/// Extended-reasoning switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingType {
    Enabled,
    Disabled,
}

/// Extended-reasoning settings passed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingConfig {
    #[serde(rename = "type")]
    pub kind: ThinkingType,
    /// Upper bound on reasoning tokens. Host default when absent.
    #[serde(
        rename = "budgetTokens",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub budget_tokens: Option<u32>,
}

/// One delegatable agent as the host consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Human-readable summary.
    pub description: String,
    pub mode: AgentMode,
    /// Opaque model identifier, e.g. `anthropic/claude-sonnet-4-5`.
    pub model: String,
    /// Generation temperature in `[0.0, 1.0]`. Host default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// System prompt, passed to the model verbatim.
    pub prompt: String,
    #[serde(flatten)]
    pub restrictions: AgentToolRestrictions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<ThinkingConfig>,
}

impl AgentConfig {
    /// Tools the host must never let this agent call.
    #[must_use]
    pub fn disabled_tools(&self) -> &[RestrictedTool] {
        self.restrictions.disabled_tools.as_deref().unwrap_or(&[])
    }

    /// Checks the numeric invariants of the descriptor.
    pub fn validate(&self, name: &str) -> Result<(), AgentError> {
        if let Some(value) = self.temperature {
            validate_temperature(name, value)?;
        }
        if let Some(thinking) = self.thinking
            && thinking.budget_tokens == Some(0)
        {
            return Err(AgentError::InvalidThinkingBudget {
                agent: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Rejects temperatures outside `[0.0, 1.0]`, including NaN.
pub fn validate_temperature(agent: &str, value: f32) -> Result<(), AgentError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AgentError::InvalidTemperature {
            agent: agent.to_string(),
            value,
        })
    }
}

// ── Orchestration metadata ───────────────────────────────────────────────────

/// Broad purpose of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    /// Fast search and navigation.
    Exploration,
    /// Domain-specific execution.
    Specialist,
    /// Deep analysis and consultation.
    Advisor,
    /// General-purpose helpers.
    Utility,
}

/// Coarse cost signal for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentCost {
    Free,
    Cheap,
    Expensive,
}

/// Informal hint telling the orchestrator when to delegate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTrigger {
    pub domain: String,
    pub trigger: String,
}

/// Orchestrator-facing description of an agent. Never sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPromptMetadata {
    pub category: AgentCategory,
    pub cost: AgentCost,
    /// Display label used in orchestrator prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_alias: Option<String>,
    pub triggers: Vec<AgentTrigger>,
    pub use_when: Vec<String>,
    pub avoid_when: Vec<String>,
}
