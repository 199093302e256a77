//! Ansible vault secret provisioning CLI.
//!
//! Wraps `ansible-vault` to generate a vault password and a service
//! password, persist the vault password for later playbook runs, and hand
//! the service password to `ansible-vault` for encrypted storage.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Business logic (config, paths, token generation)
//! - `models` — Data structures
//! - `util` — System utilities (fs, ansible-vault subprocess)

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
