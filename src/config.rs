//! Configuration loader and schema types.
//!
//! This module exposes the settings that steer library scanning and the
//! default directories, plus helpers to load them from disk.

mod load;
mod schema;

pub use load::config_dir;
pub use schema::*;
