//! The `interview-prep` agent: a resume-driven mock interviewer.

use std::sync::LazyLock;

use crate::capability::{RestrictedTool, create_agent_tool_restrictions};
use crate::types::{
    AgentCategory, AgentConfig, AgentCost, AgentMode, AgentPromptMetadata, AgentTrigger,
};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4-5";

const TEMPERATURE: f32 = 0.2;

const DESCRIPTION: &str = "Expert interview coach that analyzes resumes to generate tailored questions and STAR-method answers.";

/// Interview coaching must stay in-agent; no delegation of any kind.
const BLOCKED_TOOLS: [RestrictedTool; 3] = [
    RestrictedTool::Task,
    RestrictedTool::SisyphusTask,
    RestrictedTool::CallOmoAgent,
];

/// System prompt handed to the model verbatim.
pub const INTERVIEW_PREP_PROMPT: &str = include_str!("../prompts/interview-prep.md");

static INTERVIEW_PREP_METADATA: LazyLock<AgentPromptMetadata> =
    LazyLock::new(|| AgentPromptMetadata {
        category: AgentCategory::Advisor,
        cost: AgentCost::Cheap,
        prompt_alias: Some("Interview Coach".to_string()),
        triggers: vec![AgentTrigger {
            domain: "Interview Preparation".to_string(),
            trigger: "Resume analysis, mock interview questions, answer coaching".to_string(),
        }],
        use_when: to_strings(&[
            "User provides resume or CV",
            "Preparing for job interview",
            "Need mock interview questions",
            "Want to practice STAR method answers",
        ]),
        avoid_when: to_strings(&[
            "Actual resume writing or editing",
            "Job search strategy",
            "Salary negotiation",
        ]),
    });

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Delegation metadata for the orchestrator.
#[must_use]
pub fn interview_prep_metadata() -> &'static AgentPromptMetadata {
    &INTERVIEW_PREP_METADATA
}

/// Builds the `interview-prep` descriptor, optionally on a different model.
#[must_use]
pub fn create_interview_prep_agent(model: Option<&str>) -> AgentConfig {
    AgentConfig {
        description: DESCRIPTION.to_string(),
        mode: AgentMode::Subagent,
        model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        temperature: Some(TEMPERATURE),
        prompt: INTERVIEW_PREP_PROMPT.to_string(),
        restrictions: create_agent_tool_restrictions(&BLOCKED_TOOLS),
        thinking: None,
    }
}
