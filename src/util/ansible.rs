use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Encrypt a literal secret into a named block written to `output`.
///
/// The secret is passed on the child's argv, which is ansible-vault's own
/// CLI contract for `encrypt_string`.
pub fn encrypt_string(
    bin: &str,
    password_file: &Path,
    plaintext: &str,
    name: &str,
    output: &Path,
) -> Result<()> {
    let mut cmd = Command::new(bin);
    cmd.arg("encrypt_string")
        .arg("--vault-password-file")
        .arg(password_file)
        .arg(plaintext)
        .arg("--name")
        .arg(name)
        .arg("--output")
        .arg(output);
    run(cmd).context("ansible-vault encrypt_string")
}

/// Encrypt `target` in place, replacing its plaintext content with ciphertext.
pub fn encrypt_in_place(bin: &str, password_file: &Path, target: &Path) -> Result<()> {
    let mut cmd = Command::new(bin);
    cmd.arg("encrypt")
        .arg("--vault-password-file")
        .arg(password_file)
        .arg(target);
    run(cmd).context("ansible-vault encrypt")
}

/// Check whether the vault-encryption executable is on the search path.
pub fn available(bin: &str) -> bool {
    Command::new(bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn run(mut cmd: Command) -> Result<()> {
    let output = cmd.output().context("run command")?;
    if output.status.success() {
        return Ok(());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    bail!("command failed: {}{}", stdout, stderr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_missing_binary() {
        assert!(!available("/nonexistent/ansible-vault"));
    }

    #[test]
    fn test_encrypt_in_place_missing_binary() {
        let err = encrypt_in_place(
            "/nonexistent/ansible-vault",
            Path::new("vault_password"),
            Path::new("vault.yml"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ansible-vault encrypt"));
    }
}
