//! Secret fields read from a record's raw material at exchange time
//!
//! These are decoded separately from `CredentialKind` so that private keys
//! and refresh tokens are never held by the records themselves.

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub(super) struct UserAccountSecret {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct ServiceAccountSecret {
    pub client_email: String,
    pub private_key_id: String,
    pub private_key: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

/// JWT claims for the service-account assertion grant
#[derive(Debug, Serialize)]
pub(super) struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

/// Token response from the OAuth server
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Error body returned by the OAuth server
#[derive(Debug, Deserialize)]
pub(super) struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

fn bearer() -> String {
    "Bearer".to_string()
}
