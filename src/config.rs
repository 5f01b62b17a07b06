//! Run configuration for generate-subcommand.
//!
//! The parsed flags are folded into a single `Config` once at startup and
//! passed to the collector. Empty flag values count as unset so they are
//! prompted for, and the identifier flags are validated up front.

use crate::cli::Cli;
use crate::error::{GenerateError, Result};
use crate::params::is_identifier;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "GENERATE_SUBCOMMAND_LOG";

/// Filter used when `GENERATE_SUBCOMMAND_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Everything the run needs to know before it starts prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Subcommand name from `-cmd`.
    pub command: Option<String>,
    /// Output path from `-out`.
    pub out: Option<String>,
    /// Package name from `-pkg`.
    pub package: Option<String>,
    /// One-line synopsis from `-synopsis`.
    pub synopsis: Option<String>,
    /// Usage text from `-usage`.
    pub usage: Option<String>,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: None,
            out: None,
            package: None,
            synopsis: None,
            usage: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from parsed flags and the process environment.
    pub fn from_cli(cli: Cli) -> Self {
        Self::from_cli_with(cli, |key| std::env::var(key).ok())
    }

    fn from_cli_with<F>(cli: Cli, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            command: non_empty(cli.cmd).map(|v| v.trim().to_string()),
            out: non_empty(cli.out),
            package: non_empty(cli.pkg).map(|v| v.trim().to_string()),
            synopsis: non_empty(cli.synopsis),
            usage: non_empty(cli.usage),
            log_filter,
        }
    }

    /// Check flag-supplied identifiers with the same rule the prompts apply.
    pub fn validate(&self) -> Result<()> {
        for (flag, value) in [("cmd", &self.command), ("pkg", &self.package)] {
            if let Some(value) = value
                && !is_identifier(value)
            {
                return Err(GenerateError::InvalidFlag {
                    flag,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
