//! Integration tests for oh-my-resume CLI
//!
//! These tests spawn the actual binary with `HOME` pointed at a temp dir.

mod install_command;
