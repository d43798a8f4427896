//! Transcript segmenter.
//!
//! Splits a raw transcript into ordered [`RawRecord`]s. Message bodies may
//! span several physical lines, so record boundaries are found by testing
//! each line against the full header grammar, never by splitting on newlines.
//!
//! The scanner has two states:
//!
//! | State | Header line | System line¹ | Other line |
//! |-------|-------------|--------------|------------|
//! | outside record | open record | drop | drop (preamble) |
//! | inside body | close, open new | close, drop | append to body |
//!
//! ¹ Only when [`TranscriptConfig::skip_system_lines`] is set; otherwise a
//! system line is treated like any other line.
//!
//! # Example
//!
//! ```rust
//! use chattab::Segmenter;
//!
//! let text = "1/2/23, 09:15 - Alice: Hello there\n\
//!             1/2/23, 09:16 - +1 555-000-1111: Hi\n\
//!             this continues\n\
//!             1/2/23, 09:17 - Alice: Bye";
//!
//! let records = Segmenter::new().segment(text);
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].message, "Hi\nthis continues");
//! ```

use std::fs;
use std::mem;
use std::path::Path;
use std::sync::LazyLock;

use tracing::{debug, info, trace};

use crate::config::TranscriptConfig;
use crate::error::{ChattabError, Result};
use crate::parsing::{Header, HeaderGrammar, LineKind};
use crate::record::RawRecord;

static DEFAULT_SEGMENTER: LazyLock<Segmenter> = LazyLock::new(Segmenter::new);

/// Segments a transcript using the default `M/D/YY, HH:MM - ` header grammar.
///
/// Returns an empty vector when no header is found.
pub fn segment(raw_text: &str) -> Vec<RawRecord> {
    DEFAULT_SEGMENTER.segment(raw_text)
}

/// Transcript segmenter bound to one header grammar.
///
/// # Example
///
/// ```rust
/// use chattab::Segmenter;
/// use chattab::config::TranscriptConfig;
///
/// let segmenter = Segmenter::with_config(TranscriptConfig::new().with_skip_system_lines(true))?;
/// let records = segmenter.segment(
///     "1/2/23, 09:15 - Alice: Hi\n1/2/23, 09:16 - Bob left\n1/2/23, 09:17 - Carol: Bye",
/// );
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].message, "Hi");
/// # Ok::<(), chattab::ChattabError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: TranscriptConfig,
    grammar: HeaderGrammar,
}

impl Segmenter {
    /// Creates a segmenter with the default configuration.
    pub fn new() -> Self {
        Self {
            config: TranscriptConfig::default(),
            grammar: HeaderGrammar::default(),
        }
    }

    /// Creates a segmenter with custom configuration.
    ///
    /// Fails if the configured date or time pattern doesn't compile.
    pub fn with_config(config: TranscriptConfig) -> Result<Self> {
        let grammar = HeaderGrammar::new(&config)?;
        Ok(Self { config, grammar })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Segments transcript text into records, in transcript order.
    pub fn segment(&self, text: &str) -> Vec<RawRecord> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut records = Vec::new();
        let mut state = ScanState::OutsideRecord;
        let mut dropped = 0usize;

        for line in text.lines() {
            match self.grammar.classify(line) {
                LineKind::Header(header) => {
                    if let Some(open) = state.take() {
                        records.push(open.close());
                    }
                    state = ScanState::InsideBody(OpenRecord::start(header));
                }
                LineKind::System if self.config.skip_system_lines => {
                    if let Some(open) = state.take() {
                        records.push(open.close());
                    }
                    trace!(line, "dropping system line");
                    dropped += 1;
                }
                LineKind::System | LineKind::Text => match &mut state {
                    ScanState::InsideBody(open) => open.push_line(line),
                    ScanState::OutsideRecord => {
                        trace!(line, "dropping line before first header");
                        dropped += 1;
                    }
                },
            }
        }

        if let ScanState::InsideBody(open) = state {
            records.push(open.close());
        }

        debug!(records = records.len(), dropped, "segmented transcript");
        records
    }

    /// Decodes bytes as UTF-8, then segments them.
    ///
    /// Undecodable input is a [`ChattabError::Decode`] with no partial result.
    pub fn segment_bytes(&self, bytes: &[u8]) -> Result<Vec<RawRecord>> {
        let text = std::str::from_utf8(bytes).map_err(|e| ChattabError::decode(e, None))?;
        Ok(self.segment(text))
    }

    /// Reads a whole transcript file into memory and segments it.
    pub fn segment_file(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let bytes = fs::read(path)?;
        info!(path = %path.display(), bytes = bytes.len(), "read transcript");
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ChattabError::decode(e, Some(path.to_path_buf())))?;
        Ok(self.segment(text))
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

enum ScanState<'a> {
    OutsideRecord,
    InsideBody(OpenRecord<'a>),
}

impl<'a> ScanState<'a> {
    /// Leaves the body state, handing back the open record if there was one.
    fn take(&mut self) -> Option<OpenRecord<'a>> {
        match mem::replace(self, ScanState::OutsideRecord) {
            ScanState::InsideBody(open) => Some(open),
            ScanState::OutsideRecord => None,
        }
    }
}

/// A record whose header has been seen but whose body may still grow.
struct OpenRecord<'a> {
    header: Header<'a>,
    body: String,
}

impl<'a> OpenRecord<'a> {
    fn start(header: Header<'a>) -> Self {
        Self {
            header,
            body: header.body.to_string(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    fn close(self) -> RawRecord {
        RawRecord::new(
            self.header.date,
            self.header.time,
            self.header.sender.trim(),
            self.body.trim(),
        )
    }
}
