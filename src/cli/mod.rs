//! CLI routing and command dispatch.

use crate::core::config;
use crate::core::paths::ProvisionPaths;
use crate::models::provision_config::ProvisionFile;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod doctor;
pub mod init;
pub mod provision;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub paths: ProvisionPaths,
    pub config: ProvisionFile,
}

#[derive(Parser, Debug)]
#[command(
    name = "ctfd-provision",
    version,
    about = "Ansible vault secret provisioning for the CTFd deployment"
)]
pub struct Cli {
    /// Deployment root containing host_vars/ and group_vars/
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut paths = ProvisionPaths::resolve(self.root)?;
        let config = config::load(&paths.provision_toml)?;
        paths.apply_overrides(&config.paths);

        let ctx = CliContext { paths, config };

        match self.command {
            Commands::Inline(args) => provision::run_inline(&ctx, args),
            Commands::File(args) => provision::run_file(&ctx, args),
            Commands::Init(args) => init::run(&ctx, args),
            Commands::Doctor(args) => doctor::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the service password as an encrypted inline block in host_vars
    Inline(provision::InlineArgs),
    /// Write the group_vars vault file and encrypt it in place
    File(provision::FileArgs),
    /// Create the expected vars directory layout
    Init(init::InitArgs),
    /// Diagnose installation and layout (safe, read-only)
    Doctor(doctor::DoctorArgs),
}
