//! cognita-export
//!
//! Score reports as DOCX (via a Tera template) and raw JSON.

pub mod docx;
pub mod error;
pub mod json;
pub mod render;
pub mod styles;
