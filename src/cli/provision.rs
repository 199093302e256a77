//! The provisioning sequence: generate tokens, persist the vault password,
//! delegate service-password encryption to ansible-vault.

use crate::cli::CliContext;
use crate::constants;
use crate::core::secret;
use crate::util::{ansible, fs as provision_fs};
use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct InlineArgs {
    /// Variable name for the encrypted block
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// YAML key for the service password
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,
}

/// Inline mode: the service password goes to ansible-vault as a literal
/// argument and comes back as a named block in host_vars.
pub fn run_inline(ctx: &CliContext, args: InlineArgs) -> Result<()> {
    let vault_password = secret::generate_token();
    let service_password = secret::generate_token();

    write_vault_password(&ctx.paths.vault_password, &vault_password)?;

    let name = args.name.as_deref().unwrap_or(&ctx.config.secret.name);
    ansible::encrypt_string(
        &ctx.config.tool.ansible_vault,
        &ctx.paths.vault_password,
        &service_password,
        name,
        &ctx.paths.inline_output,
    )?;

    println!("Wrote {}", ctx.paths.vault_password.display());
    println!(
        "Encrypted {} into {}",
        name,
        ctx.paths.inline_output.display()
    );
    Ok(())
}

/// File mode: the service password is written plaintext to the group_vars
/// vault file, which ansible-vault then encrypts in place.
pub fn run_file(ctx: &CliContext, args: FileArgs) -> Result<()> {
    let vault_password = secret::generate_token();
    let service_password = secret::generate_token();

    write_vault_password(&ctx.paths.vault_password, &vault_password)?;

    let key = args.key.as_deref().unwrap_or(&ctx.config.secret.pass_key);
    write_service_vars(&ctx.paths.service_vars, key, &service_password)?;

    ansible::encrypt_in_place(
        &ctx.config.tool.ansible_vault,
        &ctx.paths.vault_password,
        &ctx.paths.service_vars,
    )?;

    println!("Wrote {}", ctx.paths.vault_password.display());
    println!("Encrypted {}", ctx.paths.service_vars.display());
    Ok(())
}

fn write_vault_password(path: &Path, token: &str) -> Result<()> {
    // Raw token bytes, no trailing newline: ansible reads the file verbatim.
    provision_fs::write_private(path, token, constants::PASSWORD_FILE_MODE)
}

/// Write the plaintext vars file. The parent directory must already exist;
/// a missing layout fails here, before any subprocess is spawned.
fn write_service_vars(path: &Path, key: &str, token: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            bail!("directory missing: {} (run init first)", parent.display());
        }
    }
    provision_fs::write_private(path, &vars_line(key, token), constants::VARS_FILE_MODE)
}

fn vars_line(key: &str, token: &str) -> String {
    format!("{}: \"{}\"\n", key, token)
}
