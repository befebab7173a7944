//! From trait implementations for AdcError conversions

use super::types::AdcError;

impl From<std::io::Error> for AdcError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AdcError {
    fn from(error: serde_json::Error) -> Self {
        Self::malformed(error.to_string())
    }
}

impl From<reqwest::Error> for AdcError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let context = error.url().map(|u| format!("POST {}", u));
        Self::TokenExchangeFailed {
            message: error.to_string(),
            status_code,
            context,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AdcError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        Self::token_exchange(format!("cannot sign assertion: {}", error))
    }
}
