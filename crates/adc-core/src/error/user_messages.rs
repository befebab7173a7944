//! User-facing classification and hints for errors
//!
//! The CLI prints every error as a single line; in verbose mode it follows
//! that line with the hint returned by `AdcError::suggestion`.

use super::types::AdcError;

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A credential file has the wrong shape
    Credential,
    /// Store directory problems
    FileSystem,
    /// Invalid user input (ambiguous or unknown names, bad flags)
    UserInput,
    /// Attempted mutation of something the store does not own
    Permission,
    /// Token endpoint failures
    Network,
    /// Configuration issues
    Configuration,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Credential => "Credential Error",
            Self::FileSystem => "File System Error",
            Self::UserInput => "Invalid Input",
            Self::Permission => "Permission Error",
            Self::Network => "Network Error",
            Self::Configuration => "Configuration Error",
        }
    }
}

impl AdcError {
    /// Classify this error for display
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedCredential { .. } => ErrorCategory::Credential,
            Self::StoreUnavailable { .. }
            | Self::StoreWriteFailed { .. }
            | Self::SourceUnreadable { .. }
            | Self::Io { .. } => ErrorCategory::FileSystem,
            Self::AmbiguousName { .. }
            | Self::NameCollision { .. }
            | Self::InvalidInput { .. }
            | Self::NotFound { .. } => ErrorCategory::UserInput,
            Self::ImmutableCredential { .. } => ErrorCategory::Permission,
            Self::TokenExchangeFailed { .. } => ErrorCategory::Network,
            Self::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// A one-line hint on how to get past this error, if there is one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MalformedCredential { path: Some(p), .. } => Some(format!(
                "Fix or remove {} and retry; every file in the store must be a credential",
                p.display()
            )),
            Self::MalformedCredential { .. } => {
                Some("Expected a JSON key file with a `type` field".to_string())
            }
            Self::StoreUnavailable { .. } | Self::StoreWriteFailed { .. } => {
                Some("Check permissions on the store directory (--store-dir)".to_string())
            }
            Self::AmbiguousName { candidates, .. } => candidates
                .iter()
                .max_by_key(|c| c.len())
                .map(|longest| format!("Type more characters, e.g. `{}`", longest)),
            Self::NameCollision { .. } => {
                Some("Use `adc add --force` to replace the stored file".to_string())
            }
            Self::ImmutableCredential { .. } => Some(
                "The user account is managed by `gcloud auth application-default login`"
                    .to_string(),
            ),
            Self::NotFound { .. } => Some("Run `adc list` to see stored credentials".to_string()),
            Self::TokenExchangeFailed {
                status_code: Some(400 | 401),
                ..
            } => Some("The key may have been revoked or deleted".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnifiedError;

    #[test]
    fn test_ambiguous_error_display_lists_candidates() {
        let error = AdcError::ambiguous("abc", vec!["abc123".to_string(), "abc456".to_string()]);
        assert_eq!(error.to_string(), "`abc` is ambiguous, it matches: abc123, abc456");
        assert_eq!(error.error_code(), "ADC_AMBIGUOUS_NAME");
        assert_eq!(error.category(), ErrorCategory::UserInput);
    }

    #[test]
    fn test_malformed_display_includes_path() {
        let error = AdcError::malformed_at("/tmp/store/bad.json", "missing field `type`");
        assert_eq!(
            error.to_string(),
            "Malformed credential at /tmp/store/bad.json: missing field `type`"
        );
        assert!(error.suggestion().unwrap().contains("/tmp/store/bad.json"));
    }

    #[test]
    fn test_malformed_display_without_path() {
        let error = AdcError::malformed("expected value");
        assert_eq!(error.to_string(), "Malformed credential: expected value");
    }

    #[test]
    fn test_with_context() {
        let error = AdcError::immutable("user", "managed externally").with_context("remove");
        assert_eq!(error.context(), Some("remove"));
        assert_eq!(error.category(), ErrorCategory::Permission);
    }

    #[test]
    fn test_token_exchange_suggestion_depends_on_status() {
        let revoked = AdcError::token_exchange_with_status("invalid_grant", 400);
        assert!(revoked.suggestion().is_some());

        let offline = AdcError::token_exchange("connection refused");
        assert!(offline.suggestion().is_none());
        assert_eq!(offline.category(), ErrorCategory::Network);
    }
}
