//! CLI console utilities
//!
//! Status messages go to stderr so that stdout carries only command output
//! (tokens, key files, shell snippets) and stays safe to pipe or `eval`.

use adc_core::error::{AdcError, UnifiedError};
use colored::*;
use console::Term;

/// CLI console for formatted status output
pub struct CliConsole {
    verbose: bool,
    term: Term,
}

impl CliConsole {
    /// Create a new CLI console
    pub fn new(verbose: bool) -> Self {
        let term = Term::stderr();
        if !term.features().colors_supported() {
            colored::control::set_override(false);
        }
        Self { verbose, term }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            self.line(format!("{} {}", "ℹ".blue().bold(), message));
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        self.line(format!("{} {}", "⚠".yellow().bold(), message.yellow()));
    }

    /// Print an error as a single line, plus its hint in verbose mode
    pub fn error(&self, error: &AdcError) {
        self.line(format!("{} {}", "✗".red().bold(), error.to_string().red()));
        if self.verbose {
            if let Some(hint) = error.suggestion() {
                self.line(format!("  {} {}", "→".dimmed(), hint.dimmed()));
            }
            self.line(format!("  {}", error.error_code().dimmed()));
        }
    }

    fn line(&self, text: String) {
        // Nothing sensible to do if stderr itself is gone.
        let _ = self.term.write_line(&text);
    }
}
