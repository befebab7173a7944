//! Credential resolution
//!
//! - `ActiveCredentialResolver` decides which credential a downstream tool
//!   would pick up by default (override variable first, then the default
//!   user-account file).
//! - `NameResolver` turns a user-typed name or unique prefix into exactly
//!   one record, or reports that it is ambiguous.

mod active;
mod name;
mod source;

pub use active::{ActiveCredential, ActiveCredentialResolver};
pub use name::NameResolver;
pub use source::CredentialSource;
