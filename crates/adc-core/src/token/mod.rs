//! Access-token exchange
//!
//! The store never inspects tokens; it only hands a record's raw material to
//! a `TokenProvider` and passes back whatever bearer token comes out.

mod google;
mod material;

pub use google::{GoogleTokenProvider, TokenInfo};

use crate::credential::CredentialRecord;
use crate::error::AdcResult;
use async_trait::async_trait;

/// Scope requested for every token
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Token endpoint used when the credential does not name one
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Exchanges a credential for a bearer access token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Perform the exchange appropriate to the record's kind
    ///
    /// Failures surface as `TokenExchangeFailed` and are never retried.
    async fn get_access_token(&self, record: &CredentialRecord) -> AdcResult<String>;
}
