//! fibroscreen-cli library root.
//!
//! Re-exports the config, form intake and command modules so integration
//! tests can exercise them without going through argument parsing.

pub mod commands;
pub mod config;
pub mod form;
