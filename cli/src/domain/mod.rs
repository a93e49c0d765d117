//! Domain layer: pure types and errors for the installer.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.

pub mod error;
pub mod install;

pub use error::InstallError;
pub use install::{InstallOutcome, NEXT_STEPS, PLUGIN_NAME, host_config_example};
