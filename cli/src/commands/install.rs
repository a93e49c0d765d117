//! `oh-my-resume install`: write the default plugin config.

use std::process::ExitCode;

use anyhow::Result;
use resume_agents::CONFIG_FILE_NAME;

use crate::app::AppContext;
use crate::application::services::install_service;
use crate::domain::{InstallOutcome, NEXT_STEPS, PLUGIN_NAME, host_config_example};
use crate::output::OutputContext;

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the config directory or file cannot be created.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = install_service::install(&app.config_store)?;
    render(&app.output, &outcome);
    tracing::debug!(
        file = CONFIG_FILE_NAME,
        created = outcome.is_created(),
        "install finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn render(out: &OutputContext, outcome: &InstallOutcome) {
    let path = outcome.path().display().to_string();
    match outcome {
        InstallOutcome::AlreadyExists { .. } => {
            out.warn(&format!("Config already exists: {path}"));
            out.info("To reinstall, delete the file first.");
        }
        InstallOutcome::Created { .. } => {
            out.success(&format!("{PLUGIN_NAME} installed successfully!"));
            out.kv("Config created:", &path);

            out.header("Next steps:");
            for (i, step) in NEXT_STEPS.iter().enumerate() {
                out.detail(&format!("{}. {step}", i + 1));
            }

            out.header("Example opencode.json:");
            out.detail(&host_config_example());
        }
    }
}
