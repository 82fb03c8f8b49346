use std::collections::HashMap;

use crate::types::{DuplicateEntry, DuplicateReport};

/// Per-document FITID counts, keyed by the trimmed raw value.
#[derive(Debug, Default)]
pub struct FitidOccurrenceTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FitidOccurrenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence and returns the 1-based index of it.
    pub fn record(&mut self, fitid: &str) -> usize {
        if let Some(count) = self.counts.get_mut(fitid) {
            *count += 1;
            return *count;
        }

        self.counts.insert(fitid.to_string(), 1);
        self.first_seen.push(fitid.to_string());
        1
    }

    pub fn count(&self, fitid: &str) -> usize {
        self.counts.get(fitid).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.first_seen.len()
    }

    /// Keeps only values seen more than once, in first-seen order, with their
    /// total count.
    pub fn into_report(self) -> DuplicateReport {
        let Self { counts, first_seen } = self;

        first_seen
            .into_iter()
            .filter_map(|fitid| {
                let occurrences = counts.get(&fitid).copied().unwrap_or(0);
                (occurrences > 1).then_some(DuplicateEntry { fitid, occurrences })
            })
            .collect()
    }
}
