//! The generate flow: collect, render, write.
//!
//! Rendering happens entirely in memory before the output file is touched,
//! so a template failure never produces a partial file.

use crate::collect::{Collected, Collector};
use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::render::Renderer;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The subcommand source was written to this path.
    Written(PathBuf),
    /// The output file existed and the user kept it.
    Declined,
}

/// Run one generation, prompting on `output` and reading answers from `input`.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<Outcome> {
    run_with(config, Collector::new(input, output))
}

/// Run one generation with a prepared collector.
pub fn run_with<R: BufRead, W: Write>(
    config: &Config,
    collector: Collector<R, W>,
) -> Result<Outcome> {
    config.validate()?;

    let (params, out) = match collector.collect(config)? {
        Collected::Ready { params, out } => (params, out),
        Collected::Declined => return Ok(Outcome::Declined),
    };

    let renderer = Renderer::new()?;
    let source = renderer.render(&params)?;
    debug!(bytes = source.len(), "template rendered");

    atomic_write_file(&out, &source)?;
    info!(path = %out.display(), command = params.command(), "subcommand generated");

    Ok(Outcome::Written(out))
}
