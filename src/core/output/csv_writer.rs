//! CSV output writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::ResolvedRecord;

/// Layout of the optional `DateTime` column.
const CSV_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `OutputConfig::delimiter` (default `,`)
/// - Columns: `Date`, `Time`, `Sender`, `Message`, plus `DateTime` when enabled
/// - Multi-line messages are quoted, embedded newlines kept
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[ResolvedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to a file.
pub fn to_csv(records: &[ResolvedRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer, config)?;
    let csv =
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

fn write_csv_to<W: Write>(
    records: &[ResolvedRecord],
    sink: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    writer.write_record(build_header(config))?;

    for record in records {
        writer.write_record(build_record(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Date", "Time", "Sender", "Message"];
    if config.include_datetime {
        header.push("DateTime");
    }
    header
}

/// Build CSV row for a single record.
fn build_record(record: &ResolvedRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = vec![
        record.date.clone(),
        record.time.clone(),
        record.sender.clone(),
        record.message.clone(),
    ];

    if config.include_datetime {
        row.push(
            record
                .datetime(&config.datetime_format)
                .map(|dt| dt.format(CSV_DATETIME_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }

    row
}
