//! CLI commands
//!
//! Each handler receives the store (or resolver) and an output sink
//! explicitly; nothing here reads global state other than the override
//! variable consulted through `ActiveCredentialResolver`.

pub mod add;
pub mod cat;
pub mod current;
pub mod env;
pub mod exec;
pub mod list;
pub mod remove;
pub mod token;

use adc_core::{ActiveCredentialResolver, AdcError, AdcResult, CredentialRecord, CredentialStore};

/// Look up a credential by name or unique prefix
pub fn find_by_name(store: &CredentialStore, name: &str) -> AdcResult<CredentialRecord> {
    store.find(name)?.ok_or_else(|| AdcError::not_found(name))
}

/// The named credential, or the active one when no name is given
pub fn named_or_active(
    store: &CredentialStore,
    resolver: &ActiveCredentialResolver,
    name: Option<&str>,
) -> AdcResult<CredentialRecord> {
    match name {
        Some(name) => find_by_name(store, name),
        None => resolver.resolve_from_env()?.ok_or_else(|| {
            AdcError::invalid_input("No active credential; pass a credential name")
        }),
    }
}
