//! `adc current`

use adc_core::{ActiveCredentialResolver, AdcResult};
use std::io::Write;

/// Print the active credential's name; prints nothing when none is active
pub fn run(resolver: &ActiveCredentialResolver, verbose: bool, out: &mut dyn Write) -> AdcResult<()> {
    if let Some(active) = resolver.resolve_from_env_with_source()? {
        writeln!(out, "{}", active.record.canonical_name())?;
        if verbose {
            writeln!(out, "{}", active.source.description())?;
        }
    }
    Ok(())
}
