//! Phone-to-name contact directory.
//!
//! Keys are always [`clean_phone`] output, so `"+1 (555) 000-1111"` and
//! `"555-000-1111"` address the same entry.
//!
//! # Duplicate policy
//!
//! Rows are applied in order and a later row with the same cleaned number
//! silently replaces the earlier one (last write wins).
//!
//! # Example
//!
//! ```rust
//! use chattab::ContactDirectory;
//!
//! let directory = ContactDirectory::from_pairs([
//!     ("+1 (555) 000-1111", "Bob"),
//!     ("555-000-2222", "Carol"),
//! ]);
//!
//! assert_eq!(directory.lookup("+1 555-000-1111"), Some("Bob"));
//! assert_eq!(directory.lookup("Alice"), None);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChattabError, Result};
use crate::parsing::clean_phone;

/// Lookup table from cleaned phone digits to display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    entries: HashMap<String, String>,
}

impl ContactDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from ordered `(raw_phone, display_name)` pairs.
    pub fn from_pairs<I, P, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, N)>,
        P: AsRef<str>,
        N: Into<String>,
    {
        let mut directory = Self::new();
        for (phone, name) in pairs {
            directory.insert(phone.as_ref(), name);
        }
        directory
    }

    /// Inserts an entry, returning the display name it replaced, if any.
    ///
    /// A phone that cleans to `""` is stored but can never be matched.
    pub fn insert(&mut self, raw_phone: &str, display_name: impl Into<String>) -> Option<String> {
        let key = clean_phone(raw_phone);
        if key.is_empty() {
            debug!(raw_phone, "contact phone has no digits; entry will never match");
        }

        let previous = self.entries.insert(key, display_name.into());
        if let Some(ref replaced) = previous {
            debug!(raw_phone, replaced = %replaced, "duplicate contact phone, later entry wins");
        }
        previous
    }

    /// Reads 2-column CSV rows `phone,name` (no header row).
    ///
    /// Fields are trimmed and blank lines are skipped. Columns beyond the
    /// second are ignored. A row without a non-empty name is rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut directory = Self::new();

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = record.position().map_or(index as u64 + 1, |pos| pos.line());

            let phone = record.get(0).unwrap_or_default();
            let name = match record.get(1) {
                Some(name) if !name.is_empty() => name,
                Some(_) => return Err(ChattabError::invalid_directory(row, "empty display name")),
                None => {
                    return Err(ChattabError::invalid_directory(
                        row,
                        format!("expected 2 fields (phone, name), found {}", record.len()),
                    ));
                }
            };

            directory.insert(phone, name);
        }

        Ok(directory)
    }

    /// Parses a contacts CSV held in memory.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Loads a contacts CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let directory = Self::from_csv_reader(file)?;
        info!(path = %path.display(), entries = directory.len(), "loaded contact directory");
        Ok(directory)
    }

    /// Resolves a raw sender to a display name, if the directory knows it.
    ///
    /// The sender is cleaned first; a sender with no digits never matches.
    pub fn lookup(&self, sender_raw: &str) -> Option<&str> {
        let key = clean_phone(sender_raw);
        if key.is_empty() {
            return None;
        }
        self.get(&key)
    }

    /// Looks up an already-cleaned phone key.
    pub fn get(&self, phone_digits: &str) -> Option<&str> {
        self.entries.get(phone_digits).map(String::as_str)
    }

    /// Returns the number of distinct phone keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(phone_digits, display_name)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_cleans_keys() {
        let directory = ContactDirectory::from_pairs([("+1 (555) 000-1111", "Bob")]);
        assert_eq!(directory.get("5550001111"), Some("Bob"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let directory = ContactDirectory::from_pairs([
            ("555-000-1111", "Bob"),
            ("+1 555 000 1111", "Robert"),
        ]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("5550001111"), Some("Robert"));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut directory = ContactDirectory::new();
        assert_eq!(directory.insert("5550001111", "Bob"), None);
        assert_eq!(directory.insert("15550001111", "Robert"), Some("Bob".to_string()));
    }

    #[test]
    fn test_empty_key_is_inert() {
        let directory = ContactDirectory::from_pairs([("no digits", "Ghost")]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("Alice"), None);
        assert_eq!(directory.lookup(""), None);
    }

    #[test]
    fn test_lookup_miss() {
        let directory = ContactDirectory::from_pairs([("5550001111", "Bob")]);
        assert_eq!(directory.lookup("+1 555-000-2222"), None);
        assert_eq!(directory.lookup("123"), None);
    }

    #[test]
    fn test_from_csv_str() {
        let csv = "+1 (555) 000-1111,Bob\n\n555-000-2222, Carol Smith \n";
        let directory = ContactDirectory::from_csv_str(csv).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.lookup("5550001111"), Some("Bob"));
        assert_eq!(directory.lookup("5550002222"), Some("Carol Smith"));
    }

    #[test]
    fn test_from_csv_quoted_fields() {
        let csv = "\"+1 (555) 000-1111\",\"Smith, Bob\"\n";
        let directory = ContactDirectory::from_csv_str(csv).unwrap();
        assert_eq!(directory.lookup("5550001111"), Some("Smith, Bob"));
    }

    #[test]
    fn test_from_csv_extra_columns_ignored() {
        let csv = "5550001111,Bob,work\n";
        let directory = ContactDirectory::from_csv_str(csv).unwrap();
        assert_eq!(directory.lookup("5550001111"), Some("Bob"));
    }

    #[test]
    fn test_from_csv_missing_name() {
        let csv = "5550001111,Bob\n5550002222\n";
        let err = ContactDirectory::from_csv_str(csv).unwrap_err();
        assert!(err.is_invalid_directory());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_from_csv_empty_name() {
        let err = ContactDirectory::from_csv_str("5550001111,\n").unwrap_err();
        assert!(err.is_invalid_directory());
    }

    #[test]
    fn test_from_csv_empty_input() {
        let directory = ContactDirectory::from_csv_str("").unwrap();
        assert!(directory.is_empty());
    }
}
