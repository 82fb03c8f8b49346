use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub fitid: String,
    /// Total occurrences in the file, first one included.
    pub occurrences: usize,
}

/// FITIDs seen more than once, in the order they first appeared.
///
/// Serializes as a JSON object `{ "<fitid>": <total occurrences> }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    entries: Vec<DuplicateEntry>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, fitid: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.fitid == fitid)
            .map(|e| e.occurrences)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DuplicateEntry> {
        self.entries.iter()
    }

    /// Occurrences beyond the first, summed over every duplicated FITID.
    /// Equals the number of rewritten lines when every marker matched verbatim.
    pub fn extra_occurrences(&self) -> usize {
        self.entries.iter().map(|e| e.occurrences - 1).sum()
    }
}

impl FromIterator<DuplicateEntry> for DuplicateReport {
    fn from_iter<I: IntoIterator<Item = DuplicateEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DuplicateReport {
    type Item = &'a DuplicateEntry;
    type IntoIter = std::slice::Iter<'a, DuplicateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for DuplicateReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.fitid, &entry.occurrences)?;
        }
        map.end()
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {} occurrences", entry.fitid, entry.occurrences)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> DuplicateReport {
        vec![
            DuplicateEntry { fitid: "Y9".to_string(), occurrences: 2 },
            DuplicateEntry { fitid: "ABC123".to_string(), occurrences: 3 },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_report_lookup() {
        let report = sample_report();

        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert_eq!(report.get("ABC123"), Some(3));
        assert_eq!(report.get("Y9"), Some(2));
        assert_eq!(report.get("missing"), None);
        assert_eq!(report.extra_occurrences(), 3);
    }

    #[test]
    fn test_report_serialization_keeps_order() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert_eq!(json, r#"{"Y9":2,"ABC123":3}"#);
    }

    #[test]
    fn test_empty_report_serialization() {
        let json = serde_json::to_string(&DuplicateReport::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_report_display() {
        let text = sample_report().to_string();
        assert_eq!(text, "Y9: 2 occurrences\nABC123: 3 occurrences\n");
    }

    #[test]
    fn test_report_iteration_order() {
        let report = sample_report();
        let fitids: Vec<&str> = (&report).into_iter().map(|e| e.fitid.as_str()).collect();
        assert_eq!(fitids, vec!["Y9", "ABC123"]);
    }
}
