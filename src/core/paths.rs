//! Deployment path layout relative to a provisioning root.

use crate::constants;
use crate::models::provision_config::PathsSection;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProvisionPaths {
    pub root: PathBuf,
    pub vault_password: PathBuf,
    pub inline_output: PathBuf,
    pub service_vars: PathBuf,
    pub provision_toml: PathBuf,
}

impl ProvisionPaths {
    /// Resolve the deployment root from CLI arg, env var, or the current directory.
    pub fn resolve(root_arg: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = root_arg {
            return Ok(Self::from_root(root));
        }
        if let Ok(root) = env::var("CTFD_PROVISION_ROOT") {
            return Ok(Self::from_root(PathBuf::from(root)));
        }
        let cwd = env::current_dir().context("resolve current directory")?;
        Ok(Self::from_root(cwd))
    }

    /// Create the default layout under a root directory.
    pub fn from_root(root: PathBuf) -> Self {
        let vault_password = root.join(constants::VAULT_PASSWORD_FILE);
        let inline_output = root.join(constants::INLINE_OUTPUT);
        let service_vars = root.join(constants::SERVICE_VARS_FILE);
        let provision_toml = root.join(constants::PROVISION_TOML);
        Self {
            root,
            vault_password,
            inline_output,
            service_vars,
            provision_toml,
        }
    }

    /// Apply relative overrides from the `[paths]` config section.
    pub fn apply_overrides(&mut self, section: &PathsSection) {
        if let Some(file) = &section.vault_password_file {
            self.vault_password = self.root.join(file);
        }
        if let Some(file) = &section.inline_output {
            self.inline_output = self.root.join(file);
        }
        if let Some(file) = &section.service_vars_file {
            self.service_vars = self.root.join(file);
        }
    }
}

impl std::fmt::Display for ProvisionPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "provision@{}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root() {
        let paths = ProvisionPaths::from_root(PathBuf::from("/deploy"));
        assert_eq!(paths.root, PathBuf::from("/deploy"));
        assert_eq!(paths.vault_password, PathBuf::from("/deploy/vault_password"));
        assert_eq!(paths.inline_output, PathBuf::from("/deploy/host_vars/vault"));
        assert_eq!(
            paths.service_vars,
            PathBuf::from("/deploy/group_vars/ctfd/vault.yml")
        );
        assert_eq!(paths.provision_toml, PathBuf::from("/deploy/provision.toml"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut paths = ProvisionPaths::from_root(PathBuf::from("/deploy"));
        let section = PathsSection {
            vault_password_file: Some(".vault_pass".into()),
            inline_output: None,
            service_vars_file: Some("group_vars/all/vault.yml".into()),
        };
        paths.apply_overrides(&section);
        assert_eq!(paths.vault_password, PathBuf::from("/deploy/.vault_pass"));
        assert_eq!(paths.inline_output, PathBuf::from("/deploy/host_vars/vault"));
        assert_eq!(
            paths.service_vars,
            PathBuf::from("/deploy/group_vars/all/vault.yml")
        );
    }
}
