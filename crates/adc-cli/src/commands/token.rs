//! `adc token`

use super::named_or_active;
use adc_core::{ActiveCredentialResolver, AdcResult, CredentialStore, TokenProvider};
use std::io::Write;
use tracing::debug;

/// Exchange a credential for an access token and print it
pub async fn run(
    store: &CredentialStore,
    resolver: &ActiveCredentialResolver,
    provider: &dyn TokenProvider,
    name: Option<&str>,
    out: &mut dyn Write,
) -> AdcResult<()> {
    let record = named_or_active(store, resolver, name)?;
    debug!("Requesting access token for {}", record.canonical_name());
    let token = provider.get_access_token(&record).await?;
    writeln!(out, "{}", token)?;
    Ok(())
}
