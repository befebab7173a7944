//! `adc env`

use super::find_by_name;
use adc_core::{AdcResult, CredentialStore};
use std::io::Write;

/// Print a POSIX shell snippet that selects (or clears) a credential
///
/// Meant to be evaluated: `eval "$(adc env my-key)"`.
pub fn run(
    store: &CredentialStore,
    name: Option<&str>,
    unset: bool,
    out: &mut dyn Write,
) -> AdcResult<()> {
    let var = &store.config().env_var;
    match name {
        Some(name) if !unset => {
            let record = find_by_name(store, name)?;
            let path = record.source_path().to_string_lossy();
            writeln!(out, "export {}={}", var, shell_quote(&path))?;
        }
        _ => writeln!(out, "unset {}", var)?,
    }
    Ok(())
}

/// Single-quote a value for POSIX shells
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestStore;

    fn render(ts: &TestStore, name: Option<&str>, unset: bool) -> String {
        let mut out = Vec::new();
        run(&ts.store, name, unset, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_export_points_at_stored_file() {
        let ts = TestStore::new().with_service_account(
            "sa.json",
            "0123456789abcdef",
            "sa@p.iam.gserviceaccount.com",
        );
        let expected_path = ts.store.find("0123").unwrap().unwrap();

        assert_eq!(
            render(&ts, Some("0123"), false),
            format!(
                "export ADC_CLI_TEST_NEVER_SET='{}'\n",
                expected_path.source_path().display()
            )
        );
    }

    #[test]
    fn test_unset() {
        let ts = TestStore::new();
        assert_eq!(render(&ts, None, true), "unset ADC_CLI_TEST_NEVER_SET\n");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/plain/path.json"), "'/plain/path.json'");
        assert_eq!(shell_quote("/it's here.json"), r"'/it'\''s here.json'");
    }
}
