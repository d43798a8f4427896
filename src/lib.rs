//! # Chattab
//!
//! A Rust library for turning exported chat transcripts into a table of
//! `(date, time, sender, message)` records.
//!
//! ## Overview
//!
//! Transcripts look like this:
//!
//! ```text
//! 1/2/23, 09:15 - Alice: Hello there
//! 1/2/23, 09:16 - +1 555-000-1111: Hi
//! this continues
//! ```
//!
//! Every record starts with a `DATE, TIME - SENDER: ` header and its body may
//! run over any number of following lines. Chattab:
//!
//! 1. **Segments** the text into [`RawRecord`]s, keeping multi-line bodies intact
//! 2. **Resolves** phone-number senders to display names via a [`ContactDirectory`]
//! 3. **Writes** the resulting [`ResolvedRecord`]s as CSV, JSON or JSONL
//!
//! ## Quick Start
//!
//! ```rust
//! use chattab::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "1/2/23, 09:15 - Alice: Hello there\n\
//!                 1/2/23, 09:16 - +1 555-000-1111: Hi\n\
//!                 this continues";
//!
//!     let records = segment(text);
//!     let directory = ContactDirectory::from_pairs([("5550001111", "Bob")]);
//!     let resolved = resolve(records, Some(&directory));
//!
//!     assert_eq!(resolved[1].sender, "Bob");
//!     assert_eq!(resolved[1].message, "Hi\nthis continues");
//!
//!     let csv = to_csv(&resolved, &OutputConfig::new())?;
//!     assert!(csv.starts_with("Date,Time,Sender,Message"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`segmenter`] - [`segment`], [`Segmenter`]
//! - [`parsing`] - header grammar and [`clean_phone`](parsing::clean_phone)
//! - [`directory`] - [`ContactDirectory`]
//! - [`resolver`] - [`resolve`], [`Resolver`], [`ResolutionStats`]
//! - [`record`] - [`RawRecord`], [`ResolvedRecord`]
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig)
//! - [`core`] - [`OutputConfig`](core::OutputConfig) and format writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`ChattabError`], [`Result`]
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `json-output` | JSON and JSONL writers | yes |
//! | `cli` | The `chattab` binary | yes |
//! | `parallel` | `Resolver::resolve_par` via rayon | no |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod directory;
pub mod error;
pub mod format;
pub mod parsing;
pub mod record;
pub mod resolver;
pub mod segmenter;

// Re-export the main types at the crate root for convenience
pub use directory::ContactDirectory;
pub use error::{ChattabError, Result};
pub use record::{RawRecord, ResolvedRecord};
pub use resolver::{ResolutionStats, Resolver, resolve};
pub use segmenter::{Segmenter, segment};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chattab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChattabError, Result};
    pub use crate::record::{RawRecord, ResolvedRecord};

    pub use crate::config::TranscriptConfig;
    pub use crate::directory::ContactDirectory;
    pub use crate::parsing::clean_phone;
    pub use crate::resolver::{ResolutionStats, Resolver, resolve};
    pub use crate::segmenter::{Segmenter, segment};

    pub use crate::core::models::OutputConfig;
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
