//! Where the active credential came from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The source of the active credential, in precedence order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    /// Named by the override environment variable
    Environment {
        /// The environment variable name
        var_name: String,
        /// The file it points at
        path: PathBuf,
    },
    /// The machine's default user-account file
    DefaultFile {
        /// Path to the file
        path: PathBuf,
    },
}

impl CredentialSource {
    /// Create an environment variable source
    pub fn env(var_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CredentialSource::Environment {
            var_name: var_name.into(),
            path: path.into(),
        }
    }

    /// Create a default-file source
    pub fn default_file(path: impl Into<PathBuf>) -> Self {
        CredentialSource::DefaultFile { path: path.into() }
    }

    /// File the credential was read from
    pub fn path(&self) -> &Path {
        match self {
            CredentialSource::Environment { path, .. } => path,
            CredentialSource::DefaultFile { path } => path,
        }
    }

    /// Get a description of where this credential came from
    pub fn description(&self) -> String {
        match self {
            CredentialSource::Environment { var_name, path } => {
                format!("Environment: ${} = {}", var_name, path.display())
            }
            CredentialSource::DefaultFile { path } => {
                format!("Default file: {}", path.display())
            }
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
