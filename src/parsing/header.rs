//! Record header grammar.
//!
//! A header line looks like:
//!
//! ```text
//! 1/2/23, 09:16 - +1 555-000-1111: Hi
//! └─date─┘ └time┘ └────sender────┘  └body
//! ```
//!
//! The sender ends at the *earliest* `": "` after the dash, so a body may
//! freely contain further colons.

use regex::Regex;

use crate::config::TranscriptConfig;
use crate::error::{ChattabError, Result};

/// A line that satisfies the full header grammar, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub date: &'a str,
    pub time: &'a str,
    /// Untrimmed sender text.
    pub sender: &'a str,
    /// Remainder of the header line after the first `": "`.
    pub body: &'a str,
}

/// How a single transcript line relates to the header grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new record.
    Header(Header<'a>),
    /// Has the `<date>, <time> - ` prefix but no sender separator,
    /// e.g. `1/2/23, 09:20 - Carol joined using this group's invite link`.
    System,
    /// Anything else: body continuation or noise.
    Text,
}

/// Compiled header grammar for one [`TranscriptConfig`].
#[derive(Debug, Clone)]
pub struct HeaderGrammar {
    header: Regex,
    prefix: Regex,
}

impl HeaderGrammar {
    /// Compiles the grammar from the config's date and time patterns.
    ///
    /// Each fragment is validated on its own first so the error names the
    /// pattern the user actually wrote.
    pub fn new(config: &TranscriptConfig) -> Result<Self> {
        for fragment in [&config.date_pattern, &config.time_pattern] {
            Regex::new(fragment)
                .map_err(|e| ChattabError::invalid_pattern(fragment.as_str(), e))?;
        }

        let date = &config.date_pattern;
        let time = &config.time_pattern;

        let header_pattern = format!(
            r"^(?P<date>(?:{date})), (?P<time>(?:{time})) - (?P<sender>.+?): (?P<body>.*)$"
        );
        let prefix_pattern = format!(r"^(?:{date}), (?:{time}) - ");

        let header = Regex::new(&header_pattern)
            .map_err(|e| ChattabError::invalid_pattern(header_pattern.clone(), e))?;
        let prefix = Regex::new(&prefix_pattern)
            .map_err(|e| ChattabError::invalid_pattern(prefix_pattern.clone(), e))?;

        Ok(Self { header, prefix })
    }

    /// Matches a line against the full header grammar.
    pub fn match_header<'a>(&self, line: &'a str) -> Option<Header<'a>> {
        let caps = self.header.captures(line)?;
        Some(Header {
            date: caps.name("date").map_or("", |m| m.as_str()),
            time: caps.name("time").map_or("", |m| m.as_str()),
            sender: caps.name("sender").map_or("", |m| m.as_str()),
            body: caps.name("body").map_or("", |m| m.as_str()),
        })
    }

    /// Classifies a line as header, system line, or plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(header) = self.match_header(line) {
            LineKind::Header(header)
        } else if self.prefix.is_match(line) {
            LineKind::System
        } else {
            LineKind::Text
        }
    }
}

impl Default for HeaderGrammar {
    fn default() -> Self {
        Self::new(&TranscriptConfig::default()).expect("built-in header grammar compiles")
    }
}
