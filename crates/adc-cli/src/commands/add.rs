//! `adc add`

use adc_core::{AddOptions, AdcResult, CredentialStore};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Copy a key file into the store and report the name it is listed under
pub fn run(store: &CredentialStore, file: &Path, force: bool, out: &mut dyn Write) -> AdcResult<()> {
    debug!("Adding {} (overwrite: {})", file.display(), force);
    let record = store.add_with(file, AddOptions::default().overwrite(force))?;
    writeln!(
        out,
        "Added {} ({})",
        record.canonical_name(),
        record.account()
    )?;
    Ok(())
}
