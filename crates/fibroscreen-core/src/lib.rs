//! fibroscreen-core
//!
//! Pure domain types for the fibromyalgia screening questionnaire: the fixed
//! pain-area, symptom, and severity catalogs, the submission and result
//! models, and export file naming. No I/O; this is the shared vocabulary
//! of the other fibroscreen crates.

pub mod catalog;
pub mod error;
pub mod export_names;
pub mod models;
