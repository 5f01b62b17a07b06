//! Golden-file verification.
//!
//! Rendered output is compared byte for byte against a stored reference
//! file. With update mode on, the reference is rewritten instead, which is
//! how the files under `testdata/` are regenerated:
//!
//! ```text
//! UPDATE_GOLDEN=1 cargo test
//! ```

use crate::fs::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that switches verification into update mode.
pub const UPDATE_ENV_VAR: &str = "UPDATE_GOLDEN";

/// What happened to a golden file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The output matched the reference exactly.
    Matched,
    /// The reference was rewritten with the new output.
    Updated,
}

#[derive(Error, Debug)]
pub enum GoldenError {
    #[error("failed to open golden file ({}): {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update golden file ({}): {message}", .path.display())]
    Update { path: PathBuf, message: String },

    #[error("output differs from {} (-got +want)\n{diff}", .path.display())]
    Mismatch { path: PathBuf, diff: String },
}

/// Whether `UPDATE_GOLDEN` asks for reference files to be rewritten.
pub fn update_requested() -> bool {
    std::env::var(UPDATE_ENV_VAR)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Compare `got` with the reference at `path`, or rewrite it when `update`.
pub fn verify(path: &Path, got: &str, update: bool) -> Result<Verification, GoldenError> {
    if update {
        atomic_write_file(path, got).map_err(|e| GoldenError::Update {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return Ok(Verification::Updated);
    }

    let want = fs::read_to_string(path).map_err(|source| GoldenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if got == want {
        Ok(Verification::Matched)
    } else {
        Err(GoldenError::Mismatch {
            path: path.to_path_buf(),
            diff: diff(got, &want),
        })
    }
}

/// Line diff of `got` against `want`.
///
/// Lines only in `got` are prefixed with `-`, lines only in `want` with `+`,
/// shared lines with a space. Returns an empty string when the inputs match.
pub fn diff(got: &str, want: &str) -> String {
    if got == want {
        return String::new();
    }

    let a: Vec<&str> = got.split('\n').collect();
    let b: Vec<&str> = want.split('\n').collect();

    // lcs[i][j] is the length of the longest common subsequence of a[i..], b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = String::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            push_line(&mut out, ' ', a[i]);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            push_line(&mut out, '-', a[i]);
            i += 1;
        } else {
            push_line(&mut out, '+', b[j]);
            j += 1;
        }
    }
    for line in &a[i..] {
        push_line(&mut out, '-', line);
    }
    for line in &b[j..] {
        push_line(&mut out, '+', line);
    }

    out
}

fn push_line(out: &mut String, marker: char, line: &str) {
    out.push(marker);
    out.push_str(line);
    out.push('\n');
}
