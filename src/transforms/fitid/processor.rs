use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::occurrences::FitidOccurrenceTable;
use crate::transforms::lines::{join_lines, split_lines};
use crate::transforms::traits::Transform;
use crate::types::DuplicateReport;

const FITID_MARKER: &str = "<FITID>";

static FITID_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<FITID>([^<\n\r]*)").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct Deduplicated {
    pub content: String,
    pub report: DuplicateReport,
}

/// Rewrites repeated `<FITID>` values so each one is unique in the file.
///
/// The first occurrence of a value is kept. Later ones get `_NN`, the
/// occurrence index zero-padded to two digits (`_02`, `_03`, ... `_100`).
pub struct FitidDeduplicator;

impl Transform for FitidDeduplicator {
    type Output = Deduplicated;

    fn apply(content: &str) -> Self::Output {
        let mut table = FitidOccurrenceTable::new();
        let mut rewritten = 0usize;

        let lines: Vec<String> = split_lines(content)
            .into_iter()
            .map(|line| {
                if !line.contains(FITID_MARKER) {
                    return line.to_string();
                }

                let Some(original) = extract_fitid(line) else {
                    return line.to_string();
                };

                let occurrence = table.record(original);
                if occurrence == 1 {
                    return line.to_string();
                }

                let new_fitid = suffixed_fitid(original, occurrence);
                tracing::debug!(fitid = original, new_fitid = %new_fitid, "rewriting duplicate FITID");
                rewritten += 1;

                line.replacen(
                    &format!("{FITID_MARKER}{original}"),
                    &format!("{FITID_MARKER}{new_fitid}"),
                    1,
                )
            })
            .collect();

        let distinct = table.distinct();
        let report = table.into_report();
        tracing::info!(
            distinct,
            duplicated = report.len(),
            rewritten,
            "FITID scan finished"
        );

        Deduplicated {
            content: join_lines(&lines),
            report,
        }
    }
}

pub fn deduplicate(content: &str) -> Deduplicated {
    FitidDeduplicator::apply(content)
}

/// Value after `<FITID>` up to the next `<` or line break, trimmed.
pub fn extract_fitid(line: &str) -> Option<&str> {
    FITID_VALUE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

pub fn suffixed_fitid(original: &str, occurrence: usize) -> String {
    format!("{original}_{occurrence:02}")
}
