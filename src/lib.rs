//! Clean up OFX bank statement files.
//!
//! Two independent operations work on the decoded text of a statement:
//! formatting (one tag per line) and FITID repair (every repeated
//! `<FITID>` value gets a `_NN` suffix so each is unique).
//!
//! ```rust,ignore
//! use ofx_cleanup::{Action, CleanupBuilder};
//!
//! let processed = CleanupBuilder::new()
//!     .filename("extrato.ofx")
//!     .action(Action::FixFitid)
//!     .run()?;
//! ```

mod builder;
mod decode;
mod types;

pub mod errors;
pub mod frontend;
pub mod transforms;

pub use builder::{Action, CleanupBuilder, Processed, is_ofx, output_file_name};
pub use decode::{Decoded, decode_content};
pub use transforms::prelude::*;
pub use types::{DuplicateEntry, DuplicateReport};
