//! Interactive collection of the template parameters.
//!
//! Every value that was not supplied as a flag is prompted for, one line at a
//! time. Malformed answers are never errors: the question is simply asked
//! again. The collector reads from any `BufRead` and writes prompts to any
//! `Write`, so tests drive it with in-memory buffers.
//!
//! # Order of questions
//!
//! 1. Subcommand name (required, asked until valid)
//! 2. Output file, defaulting to `<command>.go`
//! 3. Overwrite confirmation, only if the output file exists
//! 4. Package name, defaulting to the subcommand name
//! 5. Synopsis (optional)
//! 6. Usage (optional, read until end of input)

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::{GenerateError, Result};
use crate::params::{ParameterSet, match_file_name, match_word, resolve_username};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// All parameters are known and the output path may be written.
    Ready { params: ParameterSet, out: PathBuf },
    /// The output file exists and the user chose not to overwrite it.
    Declined,
}

/// Prompts for whatever the configuration leaves unset.
pub struct Collector<R, W> {
    input: R,
    output: W,
    username: Option<String>,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            username: None,
        }
    }

    /// Use a fixed username instead of asking the environment.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Fill in every missing parameter.
    pub fn collect(mut self, config: &Config) -> Result<Collected> {
        let command = match &config.command {
            Some(command) => command.clone(),
            None => self.ask_command()?,
        };

        let out = match &config.out {
            Some(out) => PathBuf::from(out),
            None => self.ask_out(&command)?,
        };

        if out.exists() && !self.confirm_overwrite(&out)? {
            debug!(path = %out.display(), "overwrite declined");
            return Ok(Collected::Declined);
        }

        let package = match &config.package {
            Some(package) => package.clone(),
            None => self.ask_package(&command)?,
        };

        let synopsis = match &config.synopsis {
            Some(synopsis) => synopsis.clone(),
            None => self.ask_synopsis()?,
        };

        let usage = match &config.usage {
            Some(usage) => usage.clone(),
            None => self.ask_usage()?,
        };

        let username = self.username.take().unwrap_or_else(resolve_username);

        let params = ParameterSet::new(command, package, synopsis, usage, username);
        debug!(
            command = params.command(),
            package = params.package(),
            out = %out.display(),
            "parameters collected"
        );

        Ok(Collected::Ready { params, out })
    }

    fn ask_command(&mut self) -> Result<String> {
        loop {
            let Some(line) = self.prompt("Enter subcommand's name (required): ")? else {
                return Err(GenerateError::InputClosed("a subcommand name"));
            };
            if let Some(command) = match_word(&line) {
                return Ok(command.to_string());
            }
        }
    }

    fn ask_out(&mut self, command: &str) -> Result<PathBuf> {
        let question = format!("Enter out file [{}.go]: ", command);
        loop {
            let line = self.prompt(&question)?.unwrap_or_default();
            if line.is_empty() {
                return Ok(PathBuf::from(format!("{}.go", command)));
            }
            if let Some(name) = match_file_name(&line) {
                return Ok(PathBuf::from(name));
            }
        }
    }

    fn confirm_overwrite(&mut self, out: &Path) -> Result<bool> {
        let question = format!(
            "File {:?} exists, overwrite? [y/N]: ",
            out.display().to_string()
        );
        loop {
            let line = self.prompt(&question)?.unwrap_or_default();
            match line.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "" => return Ok(false),
                _ => {}
            }
        }
    }

    fn ask_package(&mut self, command: &str) -> Result<String> {
        let question = format!("Enter package name [{}]: ", command);
        loop {
            let line = self.prompt(&question)?.unwrap_or_default();
            if line.is_empty() {
                return Ok(command.to_string());
            }
            if let Some(package) = match_word(&line) {
                return Ok(package.to_string());
            }
        }
    }

    fn ask_synopsis(&mut self) -> Result<String> {
        Ok(self
            .prompt("Enter one-line synopsis (optional): ")?
            .unwrap_or_default())
    }

    fn ask_usage(&mut self) -> Result<String> {
        let answer = self.prompt("Enter usage? [y/N]: ")?.unwrap_or_default();
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            return Ok(String::new());
        }

        writeln!(self.output, "^D to end.")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Print `question` and read the answer. `None` means input has ended.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled answer goes through the same matching as any other text.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
