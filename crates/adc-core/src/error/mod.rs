//! Error types for adc
//!
//! Every fallible operation in the store, the resolvers and the token
//! provider returns `AdcResult`. All errors implement `UnifiedError`, which
//! gives the CLI a stable error code and an optional hint to print next to
//! the one-line diagnostic.

mod constructors;
mod conversions;
mod types;
mod unified_error;
mod user_messages;

pub use types::{AdcError, AdcResult, UnifiedError};
pub use user_messages::ErrorCategory;
