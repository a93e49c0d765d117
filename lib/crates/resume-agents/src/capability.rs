//! Host tool capabilities and the restriction policy applied to agents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// A host tool that an agent can be barred from invoking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictedTool {
    /// Create or overwrite files.
    Write,
    /// Modify existing files in place.
    Edit,
    /// Delegate to a sub-agent.
    Task,
    /// Delegate through the orchestrator's task queue.
    SisyphusTask,
    /// Call another agent directly.
    CallOmoAgent,
    /// Run an interactive shell session.
    InteractiveBash,
    /// Invoke a skill over MCP.
    SkillMcp,
}

impl RestrictedTool {
    /// Every capability the host knows how to restrict.
    pub const ALL: [RestrictedTool; 7] = [
        Self::Write,
        Self::Edit,
        Self::Task,
        Self::SisyphusTask,
        Self::CallOmoAgent,
        Self::InteractiveBash,
        Self::SkillMcp,
    ];

    /// Wire name of the capability as the host spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Edit => "edit",
            Self::Task => "task",
            Self::SisyphusTask => "sisyphus_task",
            Self::CallOmoAgent => "call_omo_agent",
            Self::InteractiveBash => "interactive_bash",
            Self::SkillMcp => "skill_mcp",
        }
    }
}

impl fmt::Display for RestrictedTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestrictedTool {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| AgentError::UnknownCapability {
                name: s.to_string(),
            })
    }
}

/// Restriction block merged into an agent descriptor.
///
/// An unrestricted agent carries no `disabledTools` key at all; the host
/// treats an absent key and an empty list differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentToolRestrictions {
    #[serde(
        rename = "disabledTools",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub disabled_tools: Option<Vec<RestrictedTool>>,
}

impl AgentToolRestrictions {
    /// Returns `true` when the agent may use every host tool.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.disabled_tools.is_none()
    }

    /// Returns `true` when `tool` is blocked for the agent.
    #[must_use]
    pub fn blocks(&self, tool: RestrictedTool) -> bool {
        self.disabled_tools
            .as_deref()
            .is_some_and(|tools| tools.contains(&tool))
    }
}

/// Builds the restriction block for an agent from the tools it must not use.
///
/// Order and duplicates are preserved. An empty slice yields an
/// unrestricted block rather than an empty list.
///
/// ```
/// use resume_agents::{RestrictedTool, create_agent_tool_restrictions};
///
/// // read-only agent
/// let r = create_agent_tool_restrictions(&[RestrictedTool::Write, RestrictedTool::Edit]);
/// assert!(r.blocks(RestrictedTool::Edit));
///
/// // executor agent
/// assert!(create_agent_tool_restrictions(&[]).is_unrestricted());
/// ```
#[must_use]
pub fn create_agent_tool_restrictions(blocked: &[RestrictedTool]) -> AgentToolRestrictions {
    if blocked.is_empty() {
        return AgentToolRestrictions::default();
    }
    AgentToolRestrictions {
        disabled_tools: Some(blocked.to_vec()),
    }
}

/// Same as [`create_agent_tool_restrictions`] but takes host tool names.
///
/// Fails on the first name outside [`RestrictedTool::ALL`].
pub fn parse_tool_restrictions<S: AsRef<str>>(
    blocked: &[S],
) -> Result<AgentToolRestrictions, AgentError> {
    let tools = blocked
        .iter()
        .map(|name| name.as_ref().parse::<RestrictedTool>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(create_agent_tool_restrictions(&tools))
}
