//! Store configuration
//!
//! Paths are carried explicitly in a `StoreConfig` value instead of living in
//! process-wide state, so tests (and the CLI's `--store-dir` flag) can point
//! the store anywhere.

mod store_config;

pub use store_config::{
    DEFAULT_CREDENTIAL_ENV_VAR, StoreConfig, default_credential_path, default_store_dir,
};
