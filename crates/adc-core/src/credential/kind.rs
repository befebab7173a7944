//! Credential kinds and their identity fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a credential file holds, selected by its `type` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CredentialKind {
    /// The machine's user account (refresh token + OAuth client)
    #[serde(rename = "authorized_user")]
    UserAccount(UserAccountKey),
    /// A service-account key
    #[serde(rename = "service_account")]
    ServiceAccount(ServiceAccountKey),
}

/// Identity fields of a user-account credential
///
/// There is at most one user account, so none of these fields are used to
/// tell records apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccountKey {
    /// OAuth client the refresh token was issued to
    #[serde(default)]
    pub client_id: String,
    /// Billing project recorded by the login flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_project_id: Option<String>,
}

/// Identity fields of a service-account key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    /// Service account e-mail, `<id>@<project>.iam.gserviceaccount.com`
    pub client_email: String,
    /// Identifier of the key pair; the canonical name is derived from it
    pub private_key_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    /// Local part of the service account e-mail
    pub fn service_account_id(&self) -> &str {
        self.client_email
            .split_once('@')
            .map(|(id, _)| id)
            .unwrap_or(&self.client_email)
    }
}

impl CredentialKind {
    /// The `type` tag as written in the file
    pub fn type_tag(&self) -> &'static str {
        match self {
            CredentialKind::UserAccount(_) => "authorized_user",
            CredentialKind::ServiceAccount(_) => "service_account",
        }
    }

    /// Human-readable kind name
    pub fn name(&self) -> &'static str {
        match self {
            CredentialKind::UserAccount(_) => "User Account",
            CredentialKind::ServiceAccount(_) => "Service Account",
        }
    }

    pub fn is_user_account(&self) -> bool {
        matches!(self, CredentialKind::UserAccount(_))
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
