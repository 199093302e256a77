//! Centralized constants for paths, names, and token sizing.

/// Raw random bytes per generated token, before base64url encoding.
pub const TOKEN_BYTES: usize = 16;

/// File the vault password is written to, relative to the deployment root.
pub const VAULT_PASSWORD_FILE: &str = "vault_password";

/// Output file for the encrypted block written by inline mode.
pub const INLINE_OUTPUT: &str = "host_vars/vault";

/// Service vars file written plaintext then encrypted in place by file mode.
pub const SERVICE_VARS_FILE: &str = "group_vars/ctfd/vault.yml";

/// Variable name attached to the encrypted block in inline mode.
pub const SERVICE_SECRET_NAME: &str = "vault_service_password";

/// YAML key for the service password in file mode.
pub const SERVICE_PASS_KEY: &str = "service_pass";

/// Default name of the vault-encryption executable.
pub const ANSIBLE_VAULT_BIN: &str = "ansible-vault";

/// Optional configuration file, relative to the deployment root.
pub const PROVISION_TOML: &str = "provision.toml";

/// Permission mode for the plaintext vault password file.
pub const PASSWORD_FILE_MODE: u32 = 0o600;

/// Permission mode for the service vars file.
pub const VARS_FILE_MODE: u32 = 0o600;

/// Permission mode for vars directories created by init.
pub const VARS_DIR_MODE: u32 = 0o755;
