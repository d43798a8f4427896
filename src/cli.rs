//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! The argument struct also knows how to turn itself into the library's
//! configuration values, so the binary stays a thin driver:
//!
//! ```rust
//! use chattab::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chattab", "chat.txt", "-f", "csv,jsonl"]);
//! assert_eq!(args.output_path(args.formats[1].into()).to_str(), Some("chat.jsonl"));
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::TranscriptConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Turn an exported chat transcript into a table of
/// (date, time, sender, message) records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chattab")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chattab chat.txt
    chattab chat.txt -c contacts.csv
    chattab chat.txt -c contacts.csv -f csv,jsonl -o out/table
    chattab chat.txt --delimiter ';' --no-datetime")]
pub struct Args {
    /// Path to the transcript export
    pub input: PathBuf,

    /// Contacts CSV (phone,name per row, no header)
    #[arg(short, long, value_name = "CSV")]
    pub contacts: Option<PathBuf>,

    /// Output base path; the format extension is appended
    /// [default: input path without its extension]
    #[arg(short, long, value_name = "BASE")]
    pub output: Option<PathBuf>,

    /// Output formats, comma separated
    #[arg(
        short,
        long = "format",
        value_enum,
        value_delimiter = ',',
        default_value = "csv"
    )]
    pub formats: Vec<OutputFormat>,

    /// CSV field delimiter (single ASCII character)
    #[arg(long, value_parser = parse_delimiter, default_value = ",")]
    pub delimiter: u8,

    /// Omit the combined DateTime column
    #[arg(long)]
    pub no_datetime: bool,

    /// Drop timestamped lines that carry no sender (joins, encryption notices)
    #[arg(long)]
    pub skip_system_lines: bool,

    /// Transcript format config (JSON)
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Log parsing details to stderr (filter with RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Base path that output files are derived from.
    pub fn output_base(&self) -> PathBuf {
        match &self.output {
            Some(base) => base.clone(),
            None => self.input.with_extension(""),
        }
    }

    /// Full output path for one format: `<base>.<ext>`.
    pub fn output_path(&self, format: crate::format::OutputFormat) -> PathBuf {
        let mut path: OsString = self.output_base().into_os_string();
        path.push(".");
        path.push(format.extension());
        PathBuf::from(path)
    }

    /// Transcript config from `--config`, with flag overrides applied.
    pub fn transcript_config(&self) -> Result<TranscriptConfig> {
        let mut config = match &self.config {
            Some(path) => load_transcript_config(path)?,
            None => TranscriptConfig::default(),
        };
        if self.skip_system_lines {
            config.skip_system_lines = true;
        }
        Ok(config)
    }

    /// Output config for the requested table shape.
    pub fn output_config(&self, transcript: &TranscriptConfig) -> OutputConfig {
        let config = OutputConfig::new()
            .with_delimiter(self.delimiter)
            .with_datetime_format(transcript.datetime_format.clone());
        if self.no_datetime {
            config
        } else {
            config.with_datetime()
        }
    }
}

fn load_transcript_config(path: &Path) -> Result<TranscriptConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{value}'"
        )),
    }
}

/// Output format options.
///
/// ```rust
/// use chattab::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.to_string(), "JSONL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited table with header row (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chattab").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.formats, vec![OutputFormat::Csv]);
        assert_eq!(args.delimiter, b',');
        assert!(args.contacts.is_none());
        assert!(!args.no_datetime);
        assert_eq!(args.output_base(), PathBuf::from("chat"));
    }

    #[test]
    fn test_output_path_appends_extension() {
        let args = parse(&["chat.txt", "-o", "out/v1.table"]);
        assert_eq!(
            args.output_path(crate::format::OutputFormat::Json),
            PathBuf::from("out/v1.table.json")
        );
    }

    #[test]
    fn test_multiple_formats() {
        let args = parse(&["chat.txt", "-f", "csv,json,ndjson"]);
        assert_eq!(
            args.formats,
            vec![OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
        );
    }

    #[test]
    fn test_delimiter_validation() {
        assert_eq!(parse(&["chat.txt", "--delimiter", ";"]).delimiter, b';');
        assert!(Args::try_parse_from(["chattab", "chat.txt", "--delimiter", ";;"]).is_err());
        assert!(Args::try_parse_from(["chattab", "chat.txt", "--delimiter", "é"]).is_err());
    }

    #[test]
    fn test_output_config_from_flags() {
        let transcript = TranscriptConfig::default();

        let config = parse(&["chat.txt"]).output_config(&transcript);
        assert!(config.include_datetime);

        let config = parse(&["chat.txt", "--no-datetime"]).output_config(&transcript);
        assert!(!config.include_datetime);
    }

    #[test]
    fn test_transcript_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"time_pattern": "\\d{{1,2}}:\\d{{2}}"}}"#).unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let args = parse(&["chat.txt", "--config", &config_path, "--skip-system-lines"]);
        let config = args.transcript_config().unwrap();

        assert_eq!(config.time_pattern, r"\d{1,2}:\d{2}");
        assert!(config.skip_system_lines);
        assert_eq!(config.date_pattern, TranscriptConfig::default().date_pattern);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let args = parse(&["chat.txt", "--config", "/nonexistent/config.json"]);
        assert!(args.transcript_config().unwrap_err().is_io());
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"ndjson\"").unwrap();
        assert_eq!(parsed, OutputFormat::Jsonl);
    }
}
