//! Data structures.

pub mod provision_config;
