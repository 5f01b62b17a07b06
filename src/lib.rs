//! generate-subcommand: generate boilerplate for a new subcommand.
//!
//! The generated file contains a type which satisfies the
//! `subcommands.Command` interface from github.com/google/subcommands. All
//! parameters can be given as flags; anything left unset is prompted for.
//!
//! The flow is split into an input collector ([`collect`]) that produces a
//! [`params::ParameterSet`], and a renderer ([`render`]) that turns it into
//! source text. [`generate::run`] ties the two together and writes the
//! result; [`golden`] verifies rendered text against reference files.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generate;
pub mod golden;
pub mod logging;
pub mod params;
pub mod render;
