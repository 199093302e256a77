//! Provisioning configuration file model.

use crate::constants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionFile {
    #[serde(default)]
    pub tool: ToolSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub secret: SecretSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSection {
    /// Name or path of the vault-encryption executable.
    #[serde(default = "default_ansible_vault")]
    pub ansible_vault: String,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            ansible_vault: default_ansible_vault(),
        }
    }
}

fn default_ansible_vault() -> String {
    constants::ANSIBLE_VAULT_BIN.to_string()
}

/// Relative path overrides, joined against the deployment root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsSection {
    #[serde(default)]
    pub vault_password_file: Option<String>,
    #[serde(default)]
    pub inline_output: Option<String>,
    #[serde(default)]
    pub service_vars_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretSection {
    /// Variable name for the encrypted block in inline mode.
    #[serde(default = "default_secret_name")]
    pub name: String,

    /// YAML key for the service password in file mode.
    #[serde(default = "default_pass_key")]
    pub pass_key: String,
}

impl Default for SecretSection {
    fn default() -> Self {
        Self {
            name: default_secret_name(),
            pass_key: default_pass_key(),
        }
    }
}

fn default_secret_name() -> String {
    constants::SERVICE_SECRET_NAME.to_string()
}

fn default_pass_key() -> String {
    constants::SERVICE_PASS_KEY.to_string()
}
