//! adc core library
//!
//! This crate owns the credential store behind the `adc` command: it parses
//! credential files, enumerates the managed store directory plus the
//! machine-wide default file, decides which credential is active, resolves
//! user-typed names (or unique prefixes) to a single credential, and
//! exchanges a credential for an access token.
//!
//! # Example
//!
//! ```no_run
//! use adc_core::{ActiveCredentialResolver, CredentialStore, NameResolver, StoreConfig};
//!
//! let config = StoreConfig::default();
//! let store = CredentialStore::new(config.clone());
//! store.ensure_initialized()?;
//!
//! let records = store.list()?;
//! if let Some(record) = NameResolver::resolve_by_prefix(&records, "0123")? {
//!     println!("{} -> {}", record.canonical_name(), record.source_path().display());
//! }
//!
//! let active = ActiveCredentialResolver::new(config).resolve_from_env()?;
//! println!("active: {:?}", active.map(|r| r.canonical_name()));
//! # Ok::<(), adc_core::AdcError>(())
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod resolver;
pub mod store;
pub mod token;

pub use config::StoreConfig;
pub use credential::{
    CredentialKind, CredentialParser, CredentialRecord, ServiceAccountKey, UserAccountKey,
};
pub use error::{AdcError, AdcResult, UnifiedError};
pub use resolver::{ActiveCredential, ActiveCredentialResolver, CredentialSource, NameResolver};
pub use store::{AddOptions, CredentialStore};
pub use token::{GoogleTokenProvider, TokenProvider};
