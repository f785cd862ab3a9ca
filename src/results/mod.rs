//! Result type definitions for image search responses.

mod types;

pub use types::*;
