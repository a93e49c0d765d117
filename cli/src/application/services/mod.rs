//! Application services: use-case orchestration over port traits.

pub mod install_service;
