//! cognita-storage
//!
//! Local persistence of test records under a single data directory.
//! Keys follow [`cognita_core::keys`]; values are JSON documents.

pub mod backup;
pub mod error;
pub mod objects;
pub mod records;
pub mod state;
