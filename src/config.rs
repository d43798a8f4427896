//! Configuration types for transcript parsing.
//!
//! The header grammar is carried by an explicit [`TranscriptConfig`] value
//! instead of module-level constants, so a transcript variant with a different
//! date or time layout only needs a different config, not a different scanner.
//!
//! # Example
//!
//! ```rust
//! use chattab::config::TranscriptConfig;
//! use chattab::Segmenter;
//!
//! let config = TranscriptConfig::new()
//!     .with_time_pattern(r"\d{1,2}:\d{2}")
//!     .with_skip_system_lines(true);
//!
//! let segmenter = Segmenter::with_config(config)?;
//! # Ok::<(), chattab::ChattabError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Default date pattern: `M/D/YY` with 1–2 digit month and day.
pub const DEFAULT_DATE_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2}";

/// Default time pattern: 24-hour `HH:MM`.
pub const DEFAULT_TIME_PATTERN: &str = r"\d{2}:\d{2}";

/// Default chrono format for combining `date` and `time` (joined by a space).
pub const DEFAULT_DATETIME_FORMAT: &str = "%m/%d/%y %H:%M";

/// Configuration for transcript segmentation.
///
/// A record header has the shape `<date>, <time> - <sender>: <body>`, where
/// `<date>` and `<time>` are matched by the configured regex fragments.
///
/// # Example
///
/// ```rust
/// use chattab::config::TranscriptConfig;
///
/// let config = TranscriptConfig::default();
/// assert!(!config.skip_system_lines);
/// assert_eq!(config.datetime_format, "%m/%d/%y %H:%M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Regex fragment matching the header date (default: `M/D/YY`)
    pub date_pattern: String,

    /// Regex fragment matching the header time (default: `HH:MM`)
    pub time_pattern: String,

    /// chrono format used to combine `date` + `" "` + `time` into a datetime
    pub datetime_format: String,

    /// Treat timestamp-prefixed lines without a sender as system lines that
    /// end the open record and are dropped (default: false, they are body text)
    pub skip_system_lines: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            time_pattern: DEFAULT_TIME_PATTERN.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            skip_system_lines: false,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the regex fragment for the header date.
    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    /// Sets the regex fragment for the header time.
    #[must_use]
    pub fn with_time_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.time_pattern = pattern.into();
        self
    }

    /// Sets the chrono format used to combine `date` and `time`.
    #[must_use]
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Sets whether sender-less timestamp lines are dropped as system lines.
    #[must_use]
    pub fn with_skip_system_lines(mut self, skip: bool) -> Self {
        self.skip_system_lines = skip;
        self
    }
}
