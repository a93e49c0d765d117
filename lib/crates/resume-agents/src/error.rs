//! Typed errors for agent construction and override application.

use thiserror::Error;

use crate::capability::RestrictedTool;
use crate::registry::BuiltinAgentName;

/// Errors raised while building or customising agent descriptors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("Unknown capability '{name}'. Known capabilities: {known}", known = known_capabilities())]
    UnknownCapability { name: String },

    #[error("Unknown agent '{0}'. Built-in agents: {known}", known = BuiltinAgentName::names().join(", "))]
    UnknownAgent(String),

    #[error("Invalid temperature for agent '{agent}': {value} (must be between 0.0 and 1.0)")]
    InvalidTemperature { agent: String, value: f32 },

    #[error("Invalid thinking budget for agent '{agent}': budget must be greater than zero")]
    InvalidThinkingBudget { agent: String },
}

fn known_capabilities() -> String {
    RestrictedTool::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
