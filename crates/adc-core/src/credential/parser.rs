//! Credential file parsing
//!
//! Parsing is purely structural: the `type` tag picks the kind, the identity
//! fields needed for naming must be present, and nothing cryptographic is
//! checked. The bytes are kept verbatim for the token exchange.

use super::kind::CredentialKind;
use super::record::CredentialRecord;
use crate::error::{AdcError, AdcResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Turns raw credential bytes into a `CredentialRecord`
pub struct CredentialParser;

impl CredentialParser {
    /// Parse credential bytes loaded from `source_path`
    pub fn parse(bytes: &[u8], source_path: impl Into<PathBuf>) -> AdcResult<CredentialRecord> {
        let source_path = source_path.into();

        let kind: CredentialKind = serde_json::from_slice(bytes)
            .map_err(|e| AdcError::malformed_at(&source_path, e.to_string()))?;

        if let CredentialKind::ServiceAccount(key) = &kind {
            if key.private_key_id.is_empty() {
                return Err(AdcError::malformed_at(
                    &source_path,
                    "`private_key_id` is empty",
                ));
            }
            if key.client_email.is_empty() {
                return Err(AdcError::malformed_at(
                    &source_path,
                    "`client_email` is empty",
                ));
            }
        }

        Ok(CredentialRecord::new(kind, bytes.to_vec(), source_path))
    }

    /// Read and parse a credential file
    ///
    /// The recorded source path is made absolute.
    pub fn parse_file(path: &Path) -> AdcResult<CredentialRecord> {
        debug!("Reading credential file {}", path.display());
        let bytes = std::fs::read(path)
            .map_err(|e| AdcError::malformed_at(path, format!("cannot read file: {}", e)))?;
        Self::parse(&bytes, absolute(path))
    }

    /// Load the default user-account file
    ///
    /// A missing or unreadable file is no credential at all; a readable file
    /// that does not parse is still an error.
    pub(crate) fn parse_default_file(path: &Path) -> AdcResult<Option<CredentialRecord>> {
        if !path.is_file() {
            return Ok(None);
        }
        match std::fs::read(path) {
            Ok(bytes) => Self::parse(&bytes, absolute(path)).map(Some),
            Err(e) => {
                warn!("Skipping unreadable default credential {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
