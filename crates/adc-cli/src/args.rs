//! CLI argument definitions using clap
//!
//! - adc list                      # Show stored credentials
//! - adc add <file>                # Copy a key file into the store
//! - adc remove <name>             # Delete a stored key
//! - adc current                   # Name of the active credential
//! - adc env <name>                # Print a shell export for a credential
//! - adc exec <name> -- <cmd>      # Run a command with a credential
//! - adc token [<name>]            # Print an access token
//! - adc cat [<name>]              # Print the raw key file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adc")]
#[command(about = "Switch between stored Google application default credentials")]
#[command(
    long_about = r#"Switch between stored Google application default credentials

Service-account keys live in a store directory (~/.config/adc/credentials by
default). The machine's user account, written by
`gcloud auth application-default login`, is listed alongside them as `user`.
Every command that takes a <name> also accepts any unique prefix of it."#
)]
#[command(version)]
pub struct Cli {
    /// Directory holding stored service-account keys
    #[arg(long, global = true, env = "ADC_STORE_DIR", value_name = "DIR")]
    pub store_dir: Option<String>,

    /// Path of the default user-account credential file
    #[arg(long, global = true, env = "ADC_DEFAULT_CREDENTIAL", value_name = "FILE")]
    pub default_credential: Option<String>,

    /// Enable verbose output (debug logs and error hints)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show available credentials
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: ListFormat,
    },

    /// Copy a service-account key file into the store
    Add {
        /// Key file to copy
        file: PathBuf,

        /// Replace a stored file with the same name
        #[arg(long, short)]
        force: bool,
    },

    /// Delete a stored service-account key
    #[command(visible_alias = "rm")]
    Remove {
        /// Credential name or unique prefix
        name: String,
    },

    /// Show the active credential
    #[command(visible_alias = "active")]
    Current,

    /// Print shell commands that point GOOGLE_APPLICATION_CREDENTIALS at a credential
    #[command(verbatim_doc_comment)]
    Env {
        /// Credential name or unique prefix
        #[arg(required_unless_present = "unset")]
        name: Option<String>,

        /// Print a command that clears the variable instead
        #[arg(long, short, conflicts_with = "name")]
        unset: bool,
    },

    /// Run a command with GOOGLE_APPLICATION_CREDENTIALS set to a credential
    Exec {
        /// Credential name or unique prefix
        name: String,

        /// Command to run, with its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Print an access token for a credential (the active one by default)
    Token {
        /// Credential name or unique prefix
        name: Option<String>,
    },

    /// Print the raw key file of a credential (the active one by default)
    Cat {
        /// Credential name or unique prefix
        name: Option<String>,
    },
}

/// Output format for `adc list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Csv,
    Json,
}
