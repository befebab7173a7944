//! UnifiedError trait implementation for AdcError

use super::types::{AdcError, UnifiedError};

impl UnifiedError for AdcError {
    fn error_code(&self) -> &str {
        match self {
            Self::MalformedCredential { .. } => "ADC_MALFORMED_CREDENTIAL",
            Self::StoreUnavailable { .. } => "ADC_STORE_UNAVAILABLE",
            Self::StoreWriteFailed { .. } => "ADC_STORE_WRITE_FAILED",
            Self::SourceUnreadable { .. } => "ADC_SOURCE_UNREADABLE",
            Self::ImmutableCredential { .. } => "ADC_IMMUTABLE_CREDENTIAL",
            Self::AmbiguousName { .. } => "ADC_AMBIGUOUS_NAME",
            Self::NameCollision { .. } => "ADC_NAME_COLLISION",
            Self::TokenExchangeFailed { .. } => "ADC_TOKEN_EXCHANGE_FAILED",
            Self::Config { .. } => "ADC_CONFIG",
            Self::Io { .. } => "ADC_IO",
            Self::InvalidInput { .. } => "ADC_INVALID_INPUT",
            Self::NotFound { .. } => "ADC_NOT_FOUND",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::MalformedCredential { message, .. } => message,
            Self::StoreUnavailable { message, .. } => message,
            Self::StoreWriteFailed { message, .. } => message,
            Self::SourceUnreadable { message, .. } => message,
            Self::ImmutableCredential { message, .. } => message,
            Self::AmbiguousName { .. } => "Name matches more than one credential",
            Self::NameCollision { .. } => "Credential already exists",
            Self::TokenExchangeFailed { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::InvalidInput { message, .. } => message,
            Self::NotFound { .. } => "Credential not found",
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::MalformedCredential { context, .. } => context.as_deref(),
            Self::StoreUnavailable { context, .. } => context.as_deref(),
            Self::StoreWriteFailed { context, .. } => context.as_deref(),
            Self::SourceUnreadable { context, .. } => context.as_deref(),
            Self::ImmutableCredential { context, .. } => context.as_deref(),
            Self::AmbiguousName { .. } => None,
            Self::NameCollision { context, .. } => context.as_deref(),
            Self::TokenExchangeFailed { context, .. } => context.as_deref(),
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::InvalidInput { context, .. } => context.as_deref(),
            Self::NotFound { context, .. } => context.as_deref(),
        }
    }
}
