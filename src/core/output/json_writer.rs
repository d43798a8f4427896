//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::ResolvedRecord;

/// Layout of the optional `datetime` field.
pub(super) const JSON_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Borrowed view of a record for JSON and JSONL output.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    date: &'a str,
    time: &'a str,
    sender: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    datetime: Option<String>,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_record(record: &'a ResolvedRecord, config: &OutputConfig) -> Self {
        Self {
            date: &record.date,
            time: &record.time,
            sender: &record.sender,
            message: &record.message,
            datetime: if config.include_datetime {
                record
                    .datetime(&config.datetime_format)
                    .map(|dt| dt.format(JSON_DATETIME_FORMAT).to_string())
            } else {
                None
            },
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "1/2/23", "time": "09:15", "sender": "Alice", "message": "Hello"},
///   {"date": "1/2/23", "time": "09:16", "sender": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json(
    records: &[ResolvedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
pub fn to_json(records: &[ResolvedRecord], config: &OutputConfig) -> Result<String> {
    let json_records: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord::from_record(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_records)?)
}
