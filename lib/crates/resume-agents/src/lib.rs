//! Built-in agents for the oh-my-resume opencode plugin.
//!
//! Exposes the agent registry the host loads, the tool-restriction policy
//! used to build descriptors, and the schema of the plugin config document.

pub mod capability;
pub mod config;
pub mod error;
pub mod interview_prep;
pub mod registry;
pub mod types;

pub use capability::{
    AgentToolRestrictions, RestrictedTool, create_agent_tool_restrictions,
    parse_tool_restrictions,
};
pub use config::{AgentOverride, CONFIG_DIR, CONFIG_FILE_NAME, PluginConfig, SCHEMA_URL};
pub use error::AgentError;
pub use interview_prep::{
    DEFAULT_MODEL, INTERVIEW_PREP_PROMPT, create_interview_prep_agent, interview_prep_metadata,
};
pub use registry::{AgentRegistry, BuiltinAgentName, builtin_agents};
pub use types::{
    AgentCategory, AgentConfig, AgentCost, AgentMode, AgentPromptMetadata, AgentTrigger,
    ThinkingConfig, ThinkingType,
};
