//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all filesystem-touching code.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
