//! Output format selection independent of the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chattab::Result<()> {
//! use chattab::format::{OutputFormat, to_format_string};
//! use chattab::core::OutputConfig;
//! use chattab::ResolvedRecord;
//!
//! let records = vec![ResolvedRecord::new("1/2/23", "09:15", "Alice", "Hello!")];
//!
//! let format = OutputFormat::from_path("table.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&records, format, &OutputConfig::new())?;
//! assert!(jsonl.contains("Alice"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChattabError, Result};
use crate::record::ResolvedRecord;

/// Serialization of the resolved record table.
///
/// ```rust
/// use chattab::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Delimited table with a header row (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// MIME type for this format.
    ///
    /// ```rust
    /// use chattab::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChattabError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Csv => None,
            OutputFormat::Json | OutputFormat::Jsonl => {
                if cfg!(feature = "json-output") {
                    None
                } else {
                    Some("json-output")
                }
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat, feature: &str) -> ChattabError {
    ChattabError::invalid_format(
        "output",
        format!("Output format {format:?} requires the '{feature}' feature to be enabled"),
    )
}

/// Writes records to `path` in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot be written.
pub fn write_to_format(
    records: &[ResolvedRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    if let Some(feature) = format.required_feature() {
        return Err(missing_feature(format, feature));
    }

    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        _ => crate::core::output::write_csv(records, path, config),
    }
}

/// Renders records as a string in the given format.
pub fn to_format_string(
    records: &[ResolvedRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    if let Some(feature) = format.required_feature() {
        return Err(missing_feature(format, feature));
    }

    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        _ => crate::core::output::to_csv(records, config),
    }
}
