mod formatter;

pub mod prelude {
    pub use super::formatter::{OfxFormatter, format_ofx};
}
