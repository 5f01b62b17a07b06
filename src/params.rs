//! The parameter record rendered into the subcommand template.
//!
//! This module provides:
//! - `ParameterSet`, the five values the template needs
//! - Identifier matching used by the prompts and flag validation
//! - The export convention for non-`main` packages
//! - Best-effort resolution of the current user's name

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The package name that keeps the command unexported.
pub const MAIN_PACKAGE: &str = "main";

/// Name used in TODO comments when the current user cannot be determined.
pub const FALLBACK_USERNAME: &str = "somebody";

/// Environment variables consulted, in order, for the current user's name.
const USERNAME_VARS: &[&str] = &["USER", "USERNAME", "LOGNAME"];

/// A single word at the start of a line. Go identifiers cannot start with a
/// digit, and surrounding spaces are tolerated.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z][A-Za-z0-9]+").expect("Invalid word regex"));

/// A file name at the start of a line; the `.go` suffix is optional.
static FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z][A-Za-z0-9]+(\.go)?").expect("Invalid file name regex")
});

/// A complete identifier with nothing around it.
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]+$").expect("Invalid identifier regex"));

/// Everything the template needs to generate one subcommand.
///
/// Built once per run. The export convention is applied on construction, so
/// a command in any package other than `main` is always capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    command: String,
    package: String,
    synopsis: String,
    usage: String,
    username: String,
}

impl ParameterSet {
    /// Build a parameter set, capitalizing `command` unless `package` is `main`.
    pub fn new(
        command: impl Into<String>,
        package: impl Into<String>,
        synopsis: impl Into<String>,
        usage: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let package = package.into();
        let command = command.into();
        let command = if package == MAIN_PACKAGE {
            command
        } else {
            export(&command)
        };

        Self {
            command,
            package,
            synopsis: synopsis.into(),
            usage: usage.into(),
            username: username.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Extract the leading identifier from a line of user input.
///
/// Returns `None` when the line does not start (after optional whitespace)
/// with a letter followed by at least one letter or digit. Anything after the
/// identifier is discarded.
pub fn match_word(line: &str) -> Option<&str> {
    WORD_REGEX.find(line).map(|m| m.as_str().trim())
}

/// Extract a `.go` file name from a line of user input.
///
/// The suffix is appended when the user left it off.
pub fn match_file_name(line: &str) -> Option<String> {
    let name = FILE_REGEX.find(line)?.as_str().trim();
    if name.ends_with(".go") {
        Some(name.to_string())
    } else {
        Some(format!("{}.go", name))
    }
}

/// Whether `value` is exactly an identifier, with no surrounding text.
pub fn is_identifier(value: &str) -> bool {
    IDENT_REGEX.is_match(value)
}

/// Upper-case the first letter so the generated type is exported.
pub fn export(command: &str) -> String {
    let mut chars = command.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the user running the tool, or `somebody` when it cannot be found.
pub fn resolve_username() -> String {
    username_from(|key| std::env::var(key).ok())
}

/// Resolve a username through `lookup`, which maps variable names to values.
fn username_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    USERNAME_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_USERNAME.to_string())
}
