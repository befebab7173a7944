//! `adc cat`

use super::named_or_active;
use adc_core::{ActiveCredentialResolver, AdcResult, CredentialStore};
use std::io::Write;

/// Write a credential's key file byte-for-byte
pub fn run(
    store: &CredentialStore,
    resolver: &ActiveCredentialResolver,
    name: Option<&str>,
    out: &mut dyn Write,
) -> AdcResult<()> {
    let record = named_or_active(store, resolver, name)?;
    out.write_all(record.raw_material())?;
    out.flush()?;
    Ok(())
}
