//! Filesystem utilities for generate-subcommand.
//!
//! The output file is only ever written atomically, so an interrupted run
//! cannot leave a half-written source file behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
