//! fibroscreen-export
//!
//! JSON and CSV records of a completed assessment, and the plain-text
//! report rendered from a Tera template.

pub mod csv;
pub mod error;
pub mod json;
pub mod render;
