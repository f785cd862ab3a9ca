//! Search client module
//!
//! Issues single, non-retried queries against the upstream image search API.

mod client;

pub use client::{SearchClient, SEARCH_API_URL};
