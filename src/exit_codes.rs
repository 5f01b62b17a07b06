//! Exit code constants for generate-subcommand.
//!
//! - 0: Success (including a declined overwrite)
//! - 1: User error (invalid flag value, input closed early)
//! - 2: I/O or render failure

/// Successful execution, or the user declined to overwrite an existing file.
pub const SUCCESS: i32 = 0;

/// User error: an invalid flag value, or input ended before a required answer.
pub const USER_ERROR: i32 = 1;

/// Reading input, rendering the template, or writing the output failed.
pub const IO_FAILURE: i32 = 2;
