//! Core business logic modules.

pub mod config;
pub mod paths;
pub mod secret;
