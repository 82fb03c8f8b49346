pub mod fitid;
pub mod format;
pub mod lines;
pub mod traits;

pub mod prelude {
    pub use super::fitid::prelude::*;
    pub use super::format::prelude::*;
    pub use super::traits::Transform;
}
