//! Core error types and traits for adc

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for adc operations
pub type AdcResult<T> = Result<T, AdcError>;

/// Unified error trait implemented by `AdcError`.
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for adc
///
/// Core lookups report a name that matches nothing, or a machine with no
/// active credential, as `Ok(None)`. `NotFound` is raised by callers that
/// require a match.
#[derive(Error, Debug, Clone)]
pub enum AdcError {
    /// Unparseable credential file, unknown `type`, or missing required fields
    #[error("Malformed credential{}: {message}", at(.path))]
    MalformedCredential {
        message: String,
        path: Option<PathBuf>,
        context: Option<String>,
    },

    /// The store directory cannot be opened or enumerated
    #[error("Credential store unavailable{}: {message}", at(.path))]
    StoreUnavailable {
        message: String,
        path: Option<PathBuf>,
        context: Option<String>,
    },

    /// Creating, writing or deleting inside the store failed
    #[error("Failed to write credential store{}: {message}", at(.path))]
    StoreWriteFailed {
        message: String,
        path: Option<PathBuf>,
        context: Option<String>,
    },

    /// The file handed to `add` is missing or unreadable
    #[error("Cannot read source file {}: {message}", .path.display())]
    SourceUnreadable {
        message: String,
        path: PathBuf,
        context: Option<String>,
    },

    /// The credential is not owned by the store and must not be mutated
    #[error("Credential `{name}` cannot be modified: {message}")]
    ImmutableCredential {
        name: String,
        message: String,
        context: Option<String>,
    },

    /// A name or prefix matched two or more credentials
    #[error("`{query}` is ambiguous, it matches: {}", .candidates.join(", "))]
    AmbiguousName {
        query: String,
        candidates: Vec<String>,
    },

    /// `add` would replace or shadow an existing stored credential
    #[error("Credential `{name}` already exists at {}", .path.display())]
    NameCollision {
        name: String,
        path: PathBuf,
        context: Option<String>,
    },

    /// The token endpoint could not produce an access token
    #[error("Token exchange failed: {message}")]
    TokenExchangeFailed {
        message: String,
        status_code: Option<u16>,
        context: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors outside the store (child processes, output sinks)
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        context: Option<String>,
    },

    /// A user-typed name matched nothing (CLI surface only)
    #[error("No credential found for `{name}`")]
    NotFound {
        name: String,
        context: Option<String>,
    },
}

fn at(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p: &Path| format!(" at {}", p.display()))
        .unwrap_or_default()
}
