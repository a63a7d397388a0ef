//! Input/output helpers.
//!
//! - first-column CSV validation (`validate`)
//! - numeric column statistics (`stats`)
//! - catalog JSON read/write (`catalog`)

pub mod catalog;
pub mod stats;
pub mod validate;

pub use catalog::*;
pub use stats::*;
pub use validate::*;
