//! Command routing logic for CLI
//!
//! Builds the store configuration from the global flags, makes sure the
//! store directory exists, then hands off to the command handlers.

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use adc_core::config::{default_credential_path, default_store_dir};
use adc_core::{
    ActiveCredentialResolver, AdcError, AdcResult, CredentialStore, GoogleTokenProvider,
    StoreConfig,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, console: &CliConsole) -> AdcResult<ExitCode> {
    let config = store_config(cli.store_dir.as_deref(), cli.default_credential.as_deref())?;
    console.info(&format!("Credential store: {}", config.store_dir().display()));

    let store = CredentialStore::new(config.clone());
    store.ensure_initialized()?;
    warn_on_stale_override(&config, console);
    let resolver = ActiveCredentialResolver::new(config);
    let mut out = io::stdout();

    match cli.command {
        Commands::List { format } => {
            commands::list::run(&store, &resolver, format, console, &mut out)?
        }
        Commands::Add { file, force } => commands::add::run(&store, &file, force, &mut out)?,
        Commands::Remove { name } => commands::remove::run(&store, &name, &mut out)?,
        Commands::Current => commands::current::run(&resolver, cli.verbose, &mut out)?,
        Commands::Env { name, unset } => {
            commands::env::run(&store, name.as_deref(), unset, &mut out)?
        }
        Commands::Exec { name, command } => {
            let code = commands::exec::run(&store, &name, &command).await?;
            return Ok(ExitCode::from(code));
        }
        Commands::Token { name } => {
            let provider = GoogleTokenProvider::new();
            commands::token::run(&store, &resolver, &provider, name.as_deref(), &mut out).await?
        }
        Commands::Cat { name } => commands::cat::run(&store, &resolver, name.as_deref(), &mut out)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// The override variable is silently ignored when it names no file, which is
/// easy to miss after deleting a key.
fn warn_on_stale_override(config: &StoreConfig, console: &CliConsole) {
    if let Some(value) = std::env::var_os(&config.env_var).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        if !path.is_file() {
            console.warn(&format!(
                "${} points at {}, which is not a file; ignoring it",
                config.env_var,
                path.display()
            ));
        }
    }
}

/// Store configuration from the `--store-dir` / `--default-credential` flags
fn store_config(
    store_dir: Option<&str>,
    default_credential: Option<&str>,
) -> AdcResult<StoreConfig> {
    let store_dir = match store_dir {
        Some(dir) => expand_path(dir)?,
        None => default_store_dir(),
    };
    let default_credential = match default_credential {
        Some(path) => expand_path(path)?,
        None => default_credential_path(),
    };
    Ok(StoreConfig::new(store_dir, default_credential))
}

/// Expand `~` and make the path absolute
fn expand_path(raw: &str) -> AdcResult<PathBuf> {
    if raw.trim().is_empty() {
        return Err(AdcError::config("Empty path given on the command line"));
    }
    let expanded = shellexpand::tilde(raw);
    std::path::absolute(expanded.as_ref())
        .map_err(|e| AdcError::io_with_path(format!("Failed to resolve path: {}", e), raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flags_override_defaults() {
        let config = store_config(Some("/tmp/adc-store"), Some("/tmp/adc-user.json")).unwrap();
        assert_eq!(config.store_dir(), Path::new("/tmp/adc-store"));
        assert_eq!(
            config.default_credential_path(),
            Path::new("/tmp/adc-user.json")
        );
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = store_config(None, None).unwrap();
        assert_eq!(config.store_dir(), default_store_dir());
        assert_eq!(config.default_credential_path(), default_credential_path());
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let path = expand_path("relative/store").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("relative/store"));
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(expand_path("  "), Err(AdcError::Config { .. })));
    }
}
