//! Token exchange against Google's OAuth 2.0 token endpoint
//!
//! Supports:
//! - Refresh-token grant for the user account
//! - JWT-bearer assertion grant for service-account keys (RS256)

use super::material::{
    AssertionClaims, ServiceAccountSecret, TokenErrorResponse, TokenResponse, UserAccountSecret,
};
use super::{CLOUD_PLATFORM_SCOPE, DEFAULT_TOKEN_URI, TokenProvider};
use crate::credential::{CredentialKind, CredentialRecord};
use crate::error::{AdcError, AdcResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::de::DeserializeOwned;
use tracing::debug;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for service-account assertions
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Access token information
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// Access token
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// Expiration time in seconds
    pub expires_in: Option<u64>,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
}

impl TokenInfo {
    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        match self.expires_in {
            Some(expires_in) => {
                self.issued_at + chrono::Duration::seconds(expires_in as i64) <= Utc::now()
            }
            None => false,
        }
    }
}

/// Token provider for Google credential files
pub struct GoogleTokenProvider {
    http_client: reqwest::Client,
    scope: String,
    default_token_uri: String,
}

impl GoogleTokenProvider {
    /// Create a provider requesting the cloud-platform scope
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            default_token_uri: DEFAULT_TOKEN_URI.to_string(),
        }
    }

    /// Request a different scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Token endpoint for credentials that do not carry a `token_uri`
    pub fn with_default_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_token_uri = uri.into();
        self
    }

    /// Exchange a credential and return the full token response
    pub async fn fetch_token(&self, record: &CredentialRecord) -> AdcResult<TokenInfo> {
        match record.kind() {
            CredentialKind::UserAccount(_) => {
                let secret: UserAccountSecret = decode_material(record)?;
                self.refresh(secret).await
            }
            CredentialKind::ServiceAccount(_) => {
                let secret: ServiceAccountSecret = decode_material(record)?;
                self.assert_jwt(secret).await
            }
        }
    }

    async fn refresh(&self, secret: UserAccountSecret) -> AdcResult<TokenInfo> {
        let token_uri = secret
            .token_uri
            .as_deref()
            .unwrap_or(self.default_token_uri.as_str());

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", secret.client_id.as_str()),
            ("client_secret", secret.client_secret.as_str()),
            ("refresh_token", secret.refresh_token.as_str()),
        ];
        self.post_form(token_uri, &params).await
    }

    async fn assert_jwt(&self, secret: ServiceAccountSecret) -> AdcResult<TokenInfo> {
        let token_uri = secret
            .token_uri
            .as_deref()
            .unwrap_or(self.default_token_uri.as_str());

        let iat = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &secret.client_email,
            scope: &self.scope,
            aud: token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(secret.private_key_id.clone());

        let key = EncodingKey::from_rsa_pem(secret.private_key.as_bytes())?;
        let assertion = jsonwebtoken::encode(&header, &claims, &key)?;

        let params = [
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ];
        self.post_form(token_uri, &params).await
    }

    async fn post_form(&self, token_uri: &str, params: &[(&str, &str)]) -> AdcResult<TokenInfo> {
        debug!("Requesting access token from {}", token_uri);
        let response = self.http_client.post(token_uri).form(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {}", err.error, description),
                    None => err.error,
                },
                Err(_) if body.is_empty() => status.to_string(),
                Err(_) => body,
            };
            return Err(AdcError::token_exchange_with_status(message, status.as_u16()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AdcError::token_exchange(format!("unexpected token response: {}", e)))?;

        Ok(TokenInfo {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            issued_at: Utc::now(),
        })
    }
}

impl Default for GoogleTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for GoogleTokenProvider {
    async fn get_access_token(&self, record: &CredentialRecord) -> AdcResult<String> {
        Ok(self.fetch_token(record).await?.access_token)
    }
}

fn decode_material<T: DeserializeOwned>(record: &CredentialRecord) -> AdcResult<T> {
    serde_json::from_slice(record.raw_material()).map_err(|e| {
        AdcError::token_exchange(format!(
            "{} is missing fields needed for the exchange: {}",
            record.canonical_name(),
            e
        ))
    })
}
