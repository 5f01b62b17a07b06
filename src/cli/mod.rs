//! CLI argument parsing for generate-subcommand.
//!
//! Uses clap derive macros for declarative argument definitions. Every flag
//! is optional; anything left unset is prompted for.

use clap::Parser;
use std::ffi::OsString;

/// Flags that take a value and may be spelled with a single dash.
const VALUE_FLAGS: &[&str] = &["cmd", "out", "pkg", "synopsis", "usage"];

/// Flags without a value that may be spelled with a single dash.
const SWITCH_FLAGS: &[&str] = &["help", "version"];

const LONG_ABOUT: &str = "\
A code generator for subcommands.

The resulting file will contain a type which satisfies the subcommands.Command
interface. See https://pkg.go.dev/github.com/google/subcommands.

The command accepts all parameters in the form of flags; however, flags
that have not been specified will be prompted for. Not all inputs are
required.";

/// Generate the boilerplate for a new subcommand.
#[derive(Parser, Debug, Default)]
#[command(name = "generate-subcommand")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Name of the subcommand.
    #[arg(long, value_name = "NAME")]
    pub cmd: Option<String>,

    /// Output file.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Name of the package.
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Synopsis of the subcommand.
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub synopsis: Option<String>,

    /// Usage example of the subcommand.
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub usage: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite Go-style single-dash long flags (`-cmd foo`, `-out=foo.go`) to
/// the double-dash form clap expects.
///
/// The first item is the program name and is never touched. Values that
/// follow a flag, and everything after a bare `--`, pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let (name, has_inline_value) = match text.trim_start_matches('-').split_once('=') {
            Some((name, _)) => (name, true),
            None => (text.trim_start_matches('-'), false),
        };
        let is_value_flag = VALUE_FLAGS.contains(&name);
        let is_known = is_value_flag || SWITCH_FLAGS.contains(&name);

        if is_known && text.starts_with('-') {
            expect_value = is_value_flag && !has_inline_value;
            if text.starts_with("--") {
                normalized.push(arg);
            } else {
                normalized.push(OsString::from(format!("-{}", text)));
            }
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
