//! Diagnostics for the deployment layout and the encryption toolchain.

use crate::cli::CliContext;
use crate::constants;
use crate::util::ansible;
use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Also check for multiple ansible-vault binaries on PATH
    #[arg(long)]
    pub path: bool,
}

pub fn run(ctx: &CliContext, args: DoctorArgs) -> Result<()> {
    let paths = &ctx.paths;
    let mut ok = 0u32;
    let mut warn = 0u32;
    let mut fail = 0u32;

    println!("Doctor: {}", paths);

    if paths.root.is_dir() {
        println!("  [PASS] deployment root exists: {}", paths.root.display());
        ok += 1;
    } else {
        println!("  [FAIL] deployment root missing: {}", paths.root.display());
        fail += 1;
    }

    for dir in [
        paths.inline_output.parent(),
        paths.service_vars.parent(),
    ]
    .into_iter()
    .flatten()
    {
        if dir.is_dir() {
            println!("  [PASS] vars directory exists: {}", dir.display());
            ok += 1;
        } else {
            println!("  [WARN] vars directory missing: {} (run: init)", dir.display());
            warn += 1;
        }
    }

    let bin = &ctx.config.tool.ansible_vault;
    if ansible::available(bin) {
        println!("  [PASS] {} available", bin);
        ok += 1;
    } else {
        println!("  [FAIL] {} not found on PATH", bin);
        fail += 1;
    }

    // Password file mode check (best-effort; absence is fine before first run)
    if let Ok(meta) = fs::metadata(&paths.vault_password) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = meta.permissions().mode() & 0o777;
            if mode == constants::PASSWORD_FILE_MODE {
                println!("  [PASS] vault password mode ok: {:04o}", mode);
                ok += 1;
            } else {
                println!(
                    "  [WARN] vault password mode: {:04o} (expected {:04o})",
                    mode,
                    constants::PASSWORD_FILE_MODE
                );
                warn += 1;
            }
        }
        #[cfg(not(unix))]
        {
            let _ = meta;
        }
    }

    if args.path {
        let bins = find_bins_on_path(bin);
        if bins.is_empty() {
            println!("  [WARN] {} not found on PATH", bin);
            warn += 1;
        } else {
            println!("  [INFO] {} binaries on PATH:", bin);
            for b in &bins {
                println!("    - {}", b.display());
            }
            if bins.len() > 1 {
                println!("  [WARN] multiple binaries detected; pin one in provision.toml [tool]");
                warn += 1;
            } else {
                ok += 1;
            }
        }
    }

    println!();
    println!("Doctor summary: {} pass, {} warn, {} fail", ok, warn, fail);
    if fail > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn find_bins_on_path(name: &str) -> Vec<PathBuf> {
    let mut out: BTreeSet<PathBuf> = BTreeSet::new();
    let path = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path) {
        let candidate = dir.join(name);
        if is_executable_file(&candidate) {
            out.insert(candidate);
        }
    }
    out.into_iter().collect()
}

fn is_executable_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            return (meta.permissions().mode() & 0o111) != 0;
        }
    }
    #[cfg(not(unix))]
    {
        // best-effort on non-unix
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_executable_file_missing() {
        assert!(!is_executable_file(Path::new("/nonexistent/ansible-vault")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_file_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ansible-vault");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        assert!(!is_executable_file(&path));
    }
}
