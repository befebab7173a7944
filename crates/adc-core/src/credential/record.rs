//! Parsed credential record

use super::kind::{CredentialKind, ServiceAccountKey};
use std::fmt;
use std::path::{Path, PathBuf};

/// Canonical name of the user-account credential
pub const USER_ACCOUNT_NAME: &str = "user";

/// Number of `private_key_id` characters that make up a service account's
/// canonical name
pub const SERVICE_ACCOUNT_NAME_LEN: usize = 16;

/// One credential file, parsed
///
/// Equality covers the kind (with its identity fields) and the raw bytes;
/// `source_path` is provenance only, so the same key loaded from two
/// locations compares equal.
#[derive(Clone)]
pub struct CredentialRecord {
    kind: CredentialKind,
    raw_material: Vec<u8>,
    source_path: PathBuf,
}

impl CredentialRecord {
    pub(crate) fn new(kind: CredentialKind, raw_material: Vec<u8>, source_path: PathBuf) -> Self {
        Self {
            kind,
            raw_material,
            source_path,
        }
    }

    pub fn kind(&self) -> &CredentialKind {
        &self.kind
    }

    /// The file content exactly as it was read
    pub fn raw_material(&self) -> &[u8] {
        &self.raw_material
    }

    /// Where this record was loaded from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn is_user_account(&self) -> bool {
        self.kind.is_user_account()
    }

    /// Service-account identity, if this is a service account
    pub fn service_account(&self) -> Option<&ServiceAccountKey> {
        match &self.kind {
            CredentialKind::ServiceAccount(key) => Some(key),
            CredentialKind::UserAccount(_) => None,
        }
    }

    /// Short, stable name used for listing and prefix matching
    ///
    /// `"user"` for the user account; the first 16 characters of
    /// `private_key_id` for a service account.
    pub fn canonical_name(&self) -> String {
        match &self.kind {
            CredentialKind::UserAccount(_) => USER_ACCOUNT_NAME.to_string(),
            CredentialKind::ServiceAccount(key) => key
                .private_key_id
                .chars()
                .take(SERVICE_ACCOUNT_NAME_LEN)
                .collect(),
        }
    }

    /// Account shown next to the name: the service account e-mail, or the
    /// OAuth client id of the user account
    pub fn account(&self) -> &str {
        match &self.kind {
            CredentialKind::UserAccount(key) => &key.client_id,
            CredentialKind::ServiceAccount(key) => &key.client_email,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        match &self.kind {
            CredentialKind::UserAccount(key) => key.quota_project_id.as_deref(),
            CredentialKind::ServiceAccount(key) => {
                Some(key.project_id.as_str()).filter(|p| !p.is_empty())
            }
        }
    }
}

impl PartialEq for CredentialRecord {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.raw_material == other.raw_material
    }
}

impl Eq for CredentialRecord {}

// Raw material holds private keys and refresh tokens; keep it out of logs.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("name", &self.canonical_name())
            .field("kind", &self.kind)
            .field("raw_material", &format_args!("<{} bytes>", self.raw_material.len()))
            .field("source_path", &self.source_path)
            .finish()
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.canonical_name(), self.kind)
    }
}
