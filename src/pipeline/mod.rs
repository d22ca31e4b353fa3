//! Pipeline module - discrete columns, information measures and FCBF selection

pub mod column;
pub mod correlation;
pub mod dataset;
pub mod entropy;
pub mod error;
pub mod loader;
pub mod selector;

pub use column::*;
pub use correlation::*;
pub use dataset::*;
pub use entropy::*;
pub use error::{FcbfError, Result};
pub use loader::*;
pub use selector::*;
