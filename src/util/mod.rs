//! Utility modules for filesystem and ansible-vault operations.

pub mod ansible;
pub mod fs;
