use crate::cli::CliContext;
use crate::constants;
use crate::core::config;
use crate::util::fs as provision_fs;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Also write a default provision.toml
    #[arg(long)]
    pub write_config: bool,
}

pub fn run(ctx: &CliContext, args: InitArgs) -> Result<()> {
    let paths = &ctx.paths;

    if let Some(dir) = paths.inline_output.parent() {
        provision_fs::ensure_dir(dir, constants::VARS_DIR_MODE)?;
    }
    if let Some(dir) = paths.service_vars.parent() {
        provision_fs::ensure_dir(dir, constants::VARS_DIR_MODE)?;
    }

    if args.write_config && !paths.provision_toml.exists() {
        config::save(&paths.provision_toml, &ctx.config)?;
        println!("Wrote {}", paths.provision_toml.display());
    }

    println!("layout initialized at {}", paths.root.display());
    Ok(())
}
