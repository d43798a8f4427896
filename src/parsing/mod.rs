//! Shared parsing utilities.
//!
//! - [`header`] - the record header grammar used by the segmenter
//! - [`phone`] - phone number normalization used by the contact directory

pub mod header;
pub mod phone;

// Re-export commonly used items
pub use header::{Header, HeaderGrammar, LineKind};
pub use phone::clean_phone;
