//! The credential store
//!
//! The store is a plain directory with one service-account key file per
//! credential, plus the machine's default user-account file that lives
//! outside it. Nothing is cached: every `list` re-reads the disk.

mod credential_store;

pub use credential_store::{AddOptions, CredentialStore};
