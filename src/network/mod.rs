//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to the upstream search API.

mod client;

pub use client::{HttpClient, HttpResponse};
