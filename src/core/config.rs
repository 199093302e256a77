use crate::models::provision_config::ProvisionFile;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn load(path: &Path) -> Result<ProvisionFile> {
    if !path.exists() {
        return Ok(ProvisionFile::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read provisioning config {}", path.display()))?;
    let config: ProvisionFile = toml::from_str(&content)
        .with_context(|| format!("parse provisioning config {}", path.display()))?;
    Ok(config)
}

pub fn save(path: &Path, config: &ProvisionFile) -> Result<()> {
    let content = toml::to_string_pretty(config).context("serialize provisioning config")?;
    let mut tmp = tempfile::NamedTempFile::new_in(
        path.parent().unwrap_or_else(|| Path::new(".")),
    )
    .context("create temp provisioning config")?;
    tmp.write_all(content.as_bytes())
        .context("write provisioning config")?;
    tmp.flush().ok();
    tmp.persist(path)
        .map_err(|err| anyhow::anyhow!("persist provisioning config: {}", err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;

    #[test]
    fn test_load_missing_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("provision.toml")).unwrap();
        assert_eq!(config.tool.ansible_vault, constants::ANSIBLE_VAULT_BIN);
        assert_eq!(config.secret.name, constants::SERVICE_SECRET_NAME);
        assert_eq!(config.secret.pass_key, constants::SERVICE_PASS_KEY);
        assert!(config.paths.vault_password_file.is_none());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provision.toml");
        fs::write(
            &path,
            "[tool]\nansible_vault = \"/usr/local/bin/ansible-vault\"\n",
        )
        .unwrap();
        let config = load(&path).unwrap();
        assert_eq!(config.tool.ansible_vault, "/usr/local/bin/ansible-vault");
        assert_eq!(config.secret.name, constants::SERVICE_SECRET_NAME);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provision.toml");
        fs::write(&path, "[tool\n").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provision.toml");
        let mut config = ProvisionFile::default();
        config.secret.pass_key = "redis_pass".into();
        save(&path, &config).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.secret.pass_key, "redis_pass");
    }
}
