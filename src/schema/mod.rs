//! Schema module - Configuration and result types for Knight's Tour runs.

mod config;
mod tour;

pub use config::*;
pub use tour::*;
