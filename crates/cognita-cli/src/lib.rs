//! cognita-cli library root.
//!
//! Re-exports the command-line modules so integration tests can exercise
//! configuration handling and the command layer without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
