//! JSON Lines (JSONL) output writer.
//!
//! One record per line, handy for line-oriented tools and incremental loaders.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::ResolvedRecord;

/// Writes records to a JSONL file.
///
/// ```jsonl
/// {"date":"1/2/23","time":"09:15","sender":"Alice","message":"Hello"}
/// {"date":"1/2/23","time":"09:16","sender":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(
    records: &[ResolvedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let json = serde_json::to_string(&JsonRecord::from_record(record, config))?;
        writeln!(writer, "{}", json)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[ResolvedRecord], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();

    for record in records {
        let json = serde_json::to_string(&JsonRecord::from_record(record, config))?;
        output.push_str(&json);
        output.push('\n');
    }

    Ok(output)
}
