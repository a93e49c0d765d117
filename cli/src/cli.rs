//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// AI-Powered Interview Preparation Agent System
#[derive(Parser)]
#[command(name = "oh-my-resume", version)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate oh-my-resume.json in ~/.config/opencode/
    Install,
}

impl Cli {
    /// Execute the CLI command. Without a command, prints help.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;
        let Some(command) = command else {
            Self::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        };

        let app = AppContext::new(&OutputFlags { no_color, quiet })?;
        match command {
            Command::Install => commands::install::run(&app),
        }
    }
}

/// Print a clap parse failure and pick the exit status.
///
/// `--help` and `--version` succeed; anything else is a usage error and
/// exits with status 1.
#[must_use]
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    // clap routes help/version to stdout and usage errors to stderr.
    if let Err(e) = err.print() {
        tracing::warn!(error = %e, "failed to print clap output");
    }
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    }
}
