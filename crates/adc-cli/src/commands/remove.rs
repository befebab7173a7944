//! `adc remove`

use super::find_by_name;
use adc_core::{AdcResult, CredentialStore};
use std::io::Write;

/// Delete the stored key a name resolves to
pub fn run(store: &CredentialStore, name: &str, out: &mut dyn Write) -> AdcResult<()> {
    let record = find_by_name(store, name)?;
    store.remove(&record)?;
    writeln!(out, "Removed {}", record.canonical_name())?;
    Ok(())
}
