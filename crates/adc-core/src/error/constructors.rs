//! Constructor methods for AdcError

use super::types::AdcError;
use std::path::PathBuf;

impl AdcError {
    /// Create a malformed-credential error without a file location
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedCredential {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create a malformed-credential error for a specific file
    pub fn malformed_at(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedCredential {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a store-unavailable error
    pub fn store_unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a store-write error
    pub fn store_write_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StoreWriteFailed {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a source-unreadable error
    pub fn source_unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            message: message.into(),
            path: path.into(),
            context: None,
        }
    }

    /// Create an immutable-credential error
    pub fn immutable(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ImmutableCredential {
            name: name.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Create an ambiguous-name error
    pub fn ambiguous(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::AmbiguousName {
            query: query.into(),
            candidates,
        }
    }

    /// Create a name-collision error
    pub fn name_collision(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::NameCollision {
            name: name.into(),
            path: path.into(),
            context: None,
        }
    }

    /// Create a token-exchange error
    pub fn token_exchange(message: impl Into<String>) -> Self {
        Self::TokenExchangeFailed {
            message: message.into(),
            status_code: None,
            context: None,
        }
    }

    /// Create a token-exchange error carrying the HTTP status
    pub fn token_exchange_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::TokenExchangeFailed {
            message: message.into(),
            status_code: Some(status_code),
            context: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            context: None,
        }
    }

    /// Create a not-found error for a user-typed name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            context: None,
        }
    }

    /// Add context to any error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let ctx = Some(context.into());
        match &mut self {
            Self::MalformedCredential { context: c, .. } => *c = ctx,
            Self::StoreUnavailable { context: c, .. } => *c = ctx,
            Self::StoreWriteFailed { context: c, .. } => *c = ctx,
            Self::SourceUnreadable { context: c, .. } => *c = ctx,
            Self::ImmutableCredential { context: c, .. } => *c = ctx,
            Self::NameCollision { context: c, .. } => *c = ctx,
            Self::TokenExchangeFailed { context: c, .. } => *c = ctx,
            Self::Config { context: c, .. } => *c = ctx,
            Self::Io { context: c, .. } => *c = ctx,
            Self::InvalidInput { context: c, .. } => *c = ctx,
            Self::NotFound { context: c, .. } => *c = ctx,
            Self::AmbiguousName { .. } => {}
        }
        self
    }
}
