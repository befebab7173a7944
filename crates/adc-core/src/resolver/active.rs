//! Active credential resolution
//!
//! Mirrors how client libraries discover application default credentials,
//! so what `adc current` reports is what a child process would use.

use super::source::CredentialSource;
use crate::config::StoreConfig;
use crate::credential::{CredentialParser, CredentialRecord};
use crate::error::AdcResult;
use std::env;
use std::path::Path;
use tracing::debug;

/// The active credential together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCredential {
    pub record: CredentialRecord,
    pub source: CredentialSource,
}

/// Decides which single credential is active
pub struct ActiveCredentialResolver {
    config: StoreConfig,
}

impl ActiveCredentialResolver {
    /// Create a new resolver
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Resolve the active credential
    ///
    /// Precedence, first hit wins:
    /// 1. `env_override`, when non-empty and naming an existing file
    /// 2. the default user-account file, when it exists
    ///
    /// No active credential is `Ok(None)`. A file that exists but does not
    /// parse is an error, not a reason to fall through.
    pub fn resolve(&self, env_override: Option<&str>) -> AdcResult<Option<CredentialRecord>> {
        Ok(self.resolve_with_source(env_override)?.map(|active| active.record))
    }

    /// Like `resolve`, but also reports where the credential came from
    pub fn resolve_with_source(
        &self,
        env_override: Option<&str>,
    ) -> AdcResult<Option<ActiveCredential>> {
        // 1. Override variable
        if let Some(value) = env_override.filter(|v| !v.is_empty()) {
            let path = Path::new(value);
            if path.is_file() {
                debug!("Active credential from ${} ({})", self.config.env_var, value);
                let record = CredentialParser::parse_file(path)?;
                let source = CredentialSource::env(&self.config.env_var, record.source_path());
                return Ok(Some(ActiveCredential { record, source }));
            }
            debug!(
                "${} points at {} which does not exist, falling back",
                self.config.env_var, value
            );
        }

        // 2. Default user-account file
        let default_path = self.config.default_credential_path();
        if let Some(record) = CredentialParser::parse_default_file(default_path)? {
            debug!("Active credential from default file {}", default_path.display());
            let source = CredentialSource::default_file(record.source_path());
            return Ok(Some(ActiveCredential { record, source }));
        }

        debug!("No active credential");
        Ok(None)
    }

    /// Resolve using the override variable from the process environment
    pub fn resolve_from_env(&self) -> AdcResult<Option<CredentialRecord>> {
        let value = env::var(&self.config.env_var).ok();
        self.resolve(value.as_deref())
    }

    /// `resolve_with_source` using the process environment
    pub fn resolve_from_env_with_source(&self) -> AdcResult<Option<ActiveCredential>> {
        let value = env::var(&self.config.env_var).ok();
        self.resolve_with_source(value.as_deref())
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
