//! cognita-core
//!
//! Pure domain types and data-directory key conventions.
//! No I/O; this is the shared vocabulary of the Cognita system.

pub mod error;
pub mod keys;
pub mod models;
