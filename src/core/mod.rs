//! Tabular hand-off for resolved records.
//!
//! This module contains:
//! - [`models`] - [`OutputConfig`] controlling the table shape
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod models;
pub mod output;

// Re-export main types for convenience
pub use models::OutputConfig;

pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
