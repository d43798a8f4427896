//! Output configuration shared by all writers.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_DATETIME_FORMAT;

/// Controls the shape of the tabular output.
///
/// By default only the four record fields are written. Enabling the
/// datetime column adds `date` + `time` combined with `datetime_format`
/// (empty when they don't parse).
///
/// # Example
///
/// ```rust
/// use chattab::core::OutputConfig;
///
/// let config = OutputConfig::new().with_datetime().with_delimiter(b';');
/// assert!(config.include_datetime);
/// assert_eq!(config.delimiter, b';');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Add a combined datetime column/field
    pub include_datetime: bool,
    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,
    /// chrono format for reading `date` + `" "` + `time`
    pub datetime_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_datetime: false,
            delimiter: b',',
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_datetime(mut self) -> Self {
        self.include_datetime = true;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }
}
