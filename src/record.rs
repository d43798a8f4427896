//! Record types produced by the segmenter and the resolver.
//!
//! A transcript parse yields [`RawRecord`]s; running them through the
//! resolver yields [`ResolvedRecord`]s. Both keep the `date` and `time`
//! strings exactly as written in the transcript; turning them into a real
//! datetime is left to whoever consumes the table (see
//! [`ResolvedRecord::datetime`] for a helper).
//!
//! # Example
//!
//! ```
//! use chattab::{RawRecord, ResolvedRecord};
//!
//! let raw = RawRecord::new("1/2/23", "09:15", "+1 555-000-1111", "Hi");
//! let resolved = ResolvedRecord::from_raw(raw, "Bob");
//!
//! assert_eq!(resolved.sender(), "Bob");
//! assert_eq!(resolved.message(), "Hi");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::config::TranscriptConfig;

/// One message as segmented from the transcript, sender not yet resolved.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Date as written, e.g. `1/2/23` |
/// | `time` | Time as written, e.g. `09:15` |
/// | `sender_raw` | Identifier between the dash and the first `": "` |
/// | `message` | Body, possibly multi-line, trimmed at both ends |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    /// Date as written in the header.
    pub date: String,

    /// Time as written in the header.
    pub time: String,

    /// Sender exactly as written (trimmed): a phone number, a name, or a
    /// system string.
    pub sender_raw: String,

    /// Message body. Embedded newlines are kept verbatim.
    pub message: String,
}

impl RawRecord {
    /// Creates a new raw record.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender_raw: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender_raw: sender_raw.into(),
            message: message.into(),
        }
    }

    /// Returns the sender as written in the transcript.
    pub fn sender_raw(&self) -> &str {
        &self.sender_raw
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the message body spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.message.contains('\n')
    }
}

/// A record whose sender went through the identity resolver.
///
/// Identical to [`RawRecord`] except that `sender` holds the canonical
/// display name when the directory knew the phone number, and the raw
/// sender otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedRecord {
    /// Date as written in the header.
    pub date: String,

    /// Time as written in the header.
    pub time: String,

    /// Resolved sender identity.
    pub sender: String,

    /// Message body.
    pub message: String,
}

impl ResolvedRecord {
    /// Creates a resolved record.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Builds a resolved record from a raw one, replacing the sender.
    pub fn from_raw(raw: RawRecord, sender: impl Into<String>) -> Self {
        Self {
            date: raw.date,
            time: raw.time,
            sender: sender.into(),
            message: raw.message,
        }
    }

    /// Returns the resolved sender.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Combines `date` and `time` into a datetime using a chrono format such
    /// as [`TranscriptConfig::datetime_format`].
    ///
    /// Returns `None` when the strings don't parse, e.g. an impossible date
    /// like `13/45/23` that still matched the header digits.
    ///
    /// ```
    /// use chattab::ResolvedRecord;
    ///
    /// let record = ResolvedRecord::new("1/2/23", "09:15", "Alice", "Hello");
    /// let dt = record.datetime("%m/%d/%y %H:%M").unwrap();
    /// assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2023-01-02 09:15");
    /// ```
    pub fn datetime(&self, format: &str) -> Option<NaiveDateTime> {
        let combined = format!("{} {}", self.date, self.time);
        NaiveDateTime::parse_from_str(&combined, format).ok()
    }
}

// A resolved sequence can be fed back into the resolver.
impl From<ResolvedRecord> for RawRecord {
    fn from(record: ResolvedRecord) -> Self {
        Self {
            date: record.date,
            time: record.time,
            sender_raw: record.sender,
            message: record.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATETIME_FORMAT;

    #[test]
    fn test_raw_record_accessors() {
        let raw = RawRecord::new("1/2/23", "09:15", "Alice", "Hello\nthere");
        assert_eq!(raw.sender_raw(), "Alice");
        assert_eq!(raw.message(), "Hello\nthere");
        assert!(raw.is_multiline());
    }

    #[test]
    fn test_from_raw_keeps_other_fields() {
        let raw = RawRecord::new("1/2/23", "09:16", "+1 555-000-1111", "Hi");
        let resolved = ResolvedRecord::from_raw(raw, "Bob");
        assert_eq!(resolved, ResolvedRecord::new("1/2/23", "09:16", "Bob", "Hi"));
    }

    #[test]
    fn test_resolved_into_raw() {
        let resolved = ResolvedRecord::new("1/2/23", "09:16", "Bob", "Hi");
        let raw: RawRecord = resolved.into();
        assert_eq!(raw.sender_raw, "Bob");
        assert_eq!(raw.date, "1/2/23");
    }

    #[test]
    fn test_datetime_two_digit_year() {
        let record = ResolvedRecord::new("12/31/99", "23:59", "Alice", "bye");
        let dt = record.datetime(DEFAULT_DATETIME_FORMAT).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "1999-12-31 23:59:00");
    }

    #[test]
    fn test_datetime_invalid_date() {
        let record = ResolvedRecord::new("13/45/23", "09:15", "Alice", "Hello");
        assert!(record.datetime(DEFAULT_DATETIME_FORMAT).is_none());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_record_serde_field_names() {
        let record = ResolvedRecord::new("1/2/23", "09:15", "Alice", "Hello");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""sender":"Alice""#));
        let parsed: ResolvedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
