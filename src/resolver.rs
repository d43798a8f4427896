//! Sender identity resolution.
//!
//! Rewrites each record's raw sender into a canonical identity using an
//! optional [`ContactDirectory`]. Without a directory the resolver is an
//! explicit pass-through, so downstream code always receives
//! [`ResolvedRecord`]s.
//!
//! # Example
//!
//! ```rust
//! use chattab::{ContactDirectory, resolve, segment};
//!
//! let records = segment("1/2/23, 09:16 - +1 555-000-1111: Hi\n1/2/23, 09:17 - Alice: Bye");
//! let directory = ContactDirectory::from_pairs([("5550001111", "Bob")]);
//!
//! let resolved = resolve(records, Some(&directory));
//! assert_eq!(resolved[0].sender, "Bob");
//! assert_eq!(resolved[1].sender, "Alice");
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::directory::ContactDirectory;
use crate::record::{RawRecord, ResolvedRecord};

/// Resolves every record's sender against an optional directory.
pub fn resolve(
    records: Vec<RawRecord>,
    directory: Option<&ContactDirectory>,
) -> Vec<ResolvedRecord> {
    Resolver::new(directory).resolve(records)
}

/// Resolver bound to an optional contact directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    directory: Option<&'a ContactDirectory>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver; `None` makes it a pass-through.
    pub fn new(directory: Option<&'a ContactDirectory>) -> Self {
        Self { directory }
    }

    /// Returns the directory this resolver consults, if any.
    pub fn directory(&self) -> Option<&'a ContactDirectory> {
        self.directory
    }

    /// Resolves a single raw sender string.
    ///
    /// A directory hit yields the display name, anything else yields the
    /// raw sender verbatim.
    pub fn resolve_sender(&self, sender_raw: &str) -> String {
        self.directory
            .and_then(|directory| directory.lookup(sender_raw))
            .unwrap_or(sender_raw)
            .to_string()
    }

    /// Resolves one record.
    pub fn resolve_record(&self, record: RawRecord) -> ResolvedRecord {
        let sender = self.resolve_sender(&record.sender_raw);
        ResolvedRecord::from_raw(record, sender)
    }

    /// Resolves records in order.
    pub fn resolve(&self, records: Vec<RawRecord>) -> Vec<ResolvedRecord> {
        let resolved: Vec<ResolvedRecord> =
            records.into_iter().map(|record| self.resolve_record(record)).collect();
        debug!(
            records = resolved.len(),
            directory = self.directory.is_some(),
            "resolved senders"
        );
        resolved
    }

    /// Resolves records on the rayon thread pool.
    ///
    /// Output order and content are identical to [`Resolver::resolve`].
    #[cfg(feature = "parallel")]
    pub fn resolve_par(&self, records: Vec<RawRecord>) -> Vec<ResolvedRecord> {
        use rayon::prelude::*;

        records
            .into_par_iter()
            .map(|record| self.resolve_record(record))
            .collect()
    }

    /// Summarizes what resolving `records` would do.
    pub fn stats(&self, records: &[RawRecord]) -> ResolutionStats {
        let mut senders = HashSet::new();
        let mut directory_hits = 0;

        for record in records {
            let hit = self
                .directory
                .and_then(|directory| directory.lookup(&record.sender_raw));
            if hit.is_some() {
                directory_hits += 1;
            }
            senders.insert(hit.unwrap_or(&record.sender_raw));
        }

        ResolutionStats {
            records: records.len(),
            unique_senders: senders.len(),
            directory_hits,
        }
    }
}

/// Counts describing one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Number of records.
    pub records: usize,
    /// Distinct senders after resolution.
    pub unique_senders: usize,
    /// Records whose sender matched a directory entry.
    pub directory_hits: usize,
}

impl ResolutionStats {
    /// Percentage of records resolved through the directory (0.0 - 100.0).
    pub fn hit_ratio(&self) -> f64 {
        if self.records == 0 {
            return 0.0;
        }
        self.directory_hits as f64 / self.records as f64 * 100.0
    }
}
