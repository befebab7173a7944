//! `adc list`

use crate::args::ListFormat;
use crate::console::CliConsole;
use adc_core::{ActiveCredentialResolver, AdcError, AdcResult, CredentialRecord, CredentialStore};
use comfy_table::{Table, presets};
use serde::Serialize;
use std::io::Write;

const EMPTY_PROJECT: &str = "-";

/// One row of list output
#[derive(Debug, Serialize)]
struct CredentialRow<'a> {
    active: bool,
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    account: &'a str,
    project_id: Option<&'a str>,
    path: String,
}

impl<'a> CredentialRow<'a> {
    fn new(record: &'a CredentialRecord, active: Option<&CredentialRecord>) -> Self {
        Self {
            active: active.is_some_and(|active| active == record),
            name: record.canonical_name(),
            kind: record.kind().name(),
            account: record.account(),
            project_id: record.project_id(),
            path: record.source_path().display().to_string(),
        }
    }
}

/// List the store, marking the active credential
///
/// A broken override only costs the `*` marker; the listing itself fails
/// only when the store does.
pub fn run(
    store: &CredentialStore,
    resolver: &ActiveCredentialResolver,
    format: ListFormat,
    console: &CliConsole,
    out: &mut dyn Write,
) -> AdcResult<()> {
    let records = store.list()?;
    let active = match resolver.resolve_from_env() {
        Ok(active) => active,
        Err(e) => {
            console.warn(&format!("Cannot tell which credential is active: {}", e));
            None
        }
    };
    render(&records, active.as_ref(), format, out)
}

/// Print records in the requested format
fn render(
    records: &[CredentialRecord],
    active: Option<&CredentialRecord>,
    format: ListFormat,
    out: &mut dyn Write,
) -> AdcResult<()> {
    let rows: Vec<_> = records
        .iter()
        .map(|record| CredentialRow::new(record, active))
        .collect();

    match format {
        ListFormat::Table => write_table(&rows, out),
        ListFormat::Csv => write_csv(&rows, out),
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| AdcError::io(format!("Failed to encode list output: {}", e)))?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
    }
}

fn write_table(rows: &[CredentialRow<'_>], out: &mut dyn Write) -> AdcResult<()> {
    if rows.is_empty() {
        writeln!(out, "No credentials found.")?;
        writeln!(out)?;
        writeln!(out, "To add one:")?;
        writeln!(out, "  adc add path/to/service-account-key.json")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_header(vec!["", "NAME", "TYPE", "ACCOUNT", "PROJECT"]);
    for row in rows {
        table.add_row(vec![
            if row.active { "*" } else { "" },
            row.name.as_str(),
            row.kind,
            row.account,
            row.project_id.unwrap_or(EMPTY_PROJECT),
        ]);
    }

    for line in table.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn write_csv(rows: &[CredentialRow<'_>], out: &mut dyn Write) -> AdcResult<()> {
    let csv_error = |e: csv::Error| AdcError::io(format!("Failed to write CSV: {}", e));

    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestStore;
    use std::fs;

    fn rendered(
        records: &[CredentialRecord],
        active: Option<&CredentialRecord>,
        format: ListFormat,
    ) -> String {
        let mut out = Vec::new();
        render(records, active, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Non-blank table lines split into their words
    fn table_words(output: &str) -> Vec<Vec<&str>> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect()
    }

    fn populated() -> TestStore {
        TestStore::new()
            .with_user_account()
            .with_service_account("sa.json", "0123456789abcdef99", "ci@p.iam.gserviceaccount.com")
    }

    #[test]
    fn test_table_marks_active_credential() {
        let ts = populated();
        let records = ts.store.list().unwrap();
        let user = records.iter().find(|r| r.is_user_account()).unwrap();

        let output = rendered(&records, Some(user), ListFormat::Table);
        let lines = table_words(&output);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], vec!["NAME", "TYPE", "ACCOUNT", "PROJECT"]);
        assert_eq!(
            lines[1],
            vec![
                "0123456789abcdef",
                "Service",
                "Account",
                "ci@p.iam.gserviceaccount.com",
                "my-project"
            ]
        );
        assert_eq!(lines[2][..3], ["*", "user", "User"]);
        assert_eq!(lines[2].last(), Some(&EMPTY_PROJECT));
    }

    #[test]
    fn test_table_columns_align() {
        let ts = populated();
        let records = ts.store.list().unwrap();
        let output = rendered(&records, None, ListFormat::Table);

        let type_columns: Vec<usize> = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.find("TYPE")
                    .or_else(|| line.find("Service Account"))
                    .or_else(|| line.find("User Account"))
                    .unwrap()
            })
            .collect();
        assert_eq!(type_columns.len(), 3);
        assert!(type_columns.windows(2).all(|w| w[0] == w[1]));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_empty_table_shows_hint() {
        let output = rendered(&[], None, ListFormat::Table);
        assert!(output.starts_with("No credentials found."));
        assert!(output.contains("adc add"));
    }

    #[test]
    fn test_csv_output() {
        let ts = populated();
        let records = ts.store.list().unwrap();
        let output = rendered(&records, records.first(), ListFormat::Csv);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "active,name,type,account,project_id,path");
        assert!(lines[1].starts_with(
            "true,0123456789abcdef,Service Account,ci@p.iam.gserviceaccount.com,my-project,"
        ));
        assert!(lines[2].starts_with("false,user,User Account,cid.apps.googleusercontent.com,,"));
    }

    #[test]
    fn test_csv_quotes_awkward_fields() {
        let ts = TestStore::new().with_service_account(
            "sa.json",
            "0123456789abcdef",
            "sa@p.iam.gserviceaccount.com",
        );
        let records = ts.store.list().unwrap();
        let awkward = ts.outside_file(
            "team \"a\", prod.json",
            &fs::read_to_string(records[0].source_path()).unwrap(),
        );
        let record = adc_core::CredentialParser::parse_file(&awkward).unwrap();

        let output = rendered(&[record], None, ListFormat::Csv);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[5], awkward.display().to_string());
        assert!(output.contains("\"\"a\"\""));
    }

    #[test]
    fn test_json_output() {
        let ts = populated();
        let records = ts.store.list().unwrap();
        let output = rendered(&records, records.last(), ListFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "0123456789abcdef");
        assert_eq!(rows[0]["type"], "Service Account");
        assert_eq!(rows[0]["project_id"], "my-project");
        assert_eq!(rows[0]["active"], false);
        assert_eq!(rows[1]["name"], "user");
        assert_eq!(rows[1]["project_id"], serde_json::Value::Null);
        assert_eq!(rows[1]["active"], true);
    }

    #[test]
    fn test_unusable_override_still_lists_store() {
        let ts = populated();
        let external = ts.outside_file(
            "external.json",
            r#"{"type": "external_account", "audience": "//iam.googleapis.com/x"}"#,
        );
        let var = "ADC_CLI_TEST_LIST_EXTERNAL_OVERRIDE";
        let resolver =
            ActiveCredentialResolver::new(ts.store.config().clone().with_env_var(var));

        // Use unsafe block for Rust 2024
        unsafe {
            std::env::set_var(var, &external);
        }
        let mut out = Vec::new();
        let result = run(
            &ts.store,
            &resolver,
            ListFormat::Csv,
            &CliConsole::new(false),
            &mut out,
        );
        unsafe {
            std::env::remove_var(var);
        }

        result.unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("false,0123456789abcdef,"));
        assert!(lines[2].starts_with("false,user,"));
    }
}
