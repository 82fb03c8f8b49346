mod occurrences;
mod processor;

pub mod prelude {
    pub use super::occurrences::FitidOccurrenceTable;
    pub use super::processor::{
        Deduplicated, FitidDeduplicator, deduplicate, extract_fitid, suffixed_fitid,
    };
}
