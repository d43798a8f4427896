//! Output format writers.
//!
//! This module provides writers for the resolved record table:
//! - [`write_csv`] / [`to_csv`] - delimited text, always available
//! - [`write_json`] / [`to_json`] - JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! use chattab::core::output::{to_csv, write_csv};
//! use chattab::core::OutputConfig;
//! use chattab::ResolvedRecord;
//!
//! let records = vec![ResolvedRecord::new("1/2/23", "09:15", "Alice", "Hello!")];
//! let config = OutputConfig::new().with_datetime();
//!
//! write_csv(&records, "output.csv", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok::<(), chattab::ChattabError>(())
//! ```

mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
