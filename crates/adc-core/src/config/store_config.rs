//! Store and resolver configuration

use std::path::{Path, PathBuf};

/// Environment variable that points consuming tools at a credential file
pub const DEFAULT_CREDENTIAL_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Configuration shared by the credential store and the active resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one service-account key file per credential
    pub store_dir: PathBuf,
    /// The single user-account file written by the external login flow
    pub default_credential_path: PathBuf,
    /// Override variable consulted by the active resolver
    pub env_var: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            default_credential_path: default_credential_path(),
            env_var: DEFAULT_CREDENTIAL_ENV_VAR.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config with an explicit store directory and default-file path
    pub fn new(store_dir: impl Into<PathBuf>, default_credential_path: impl Into<PathBuf>) -> Self {
        Self {
            store_dir: store_dir.into(),
            default_credential_path: default_credential_path.into(),
            env_var: DEFAULT_CREDENTIAL_ENV_VAR.to_string(),
        }
    }

    /// Set the store directory
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }

    /// Set the default user-account credential path
    pub fn with_default_credential_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_credential_path = path.into();
        self
    }

    /// Set the override environment variable name
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Get the store directory
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Get the default user-account credential path
    pub fn default_credential_path(&self) -> &Path {
        &self.default_credential_path
    }

    /// Path a file with the given base name would occupy inside the store
    pub fn stored_path(&self, file_name: &str) -> PathBuf {
        self.store_dir.join(file_name)
    }
}

/// `~/.config/adc/credentials`
pub fn default_store_dir() -> PathBuf {
    config_home().join("adc").join("credentials")
}

/// `~/.config/gcloud/application_default_credentials.json`
pub fn default_credential_path() -> PathBuf {
    config_home()
        .join("gcloud")
        .join("application_default_credentials.json")
}

// gcloud uses ~/.config on every unix, not the platform config dir.
fn config_home() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".config")
}
