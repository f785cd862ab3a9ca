//! Result type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single image search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    /// Absolute URL of the image
    pub link: String,
    /// Display title, used as the accessible text of the rendered element
    #[serde(default)]
    pub title: String,
    /// Host the result was found on
    #[serde(rename = "displayLink", default, skip_serializing_if = "Option::is_none")]
    pub display_link: Option<String>,
    /// Text snippet around the hit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// MIME type of the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Image-specific metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,
}

impl ImageItem {
    /// Create a new item from link and title
    pub fn new(link: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
            display_link: None,
            snippet: None,
            mime: None,
            image: None,
        }
    }

    /// Thumbnail URL, when the API supplied one
    pub fn thumbnail(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|i| i.thumbnail_link.as_deref())
    }

    /// Page the image was embedded in, when the API supplied one
    pub fn context(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.context_link.as_deref())
    }
}

/// Metadata the API attaches to an image hit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageInfo {
    #[serde(rename = "thumbnailLink", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,
    #[serde(rename = "contextLink", default, skip_serializing_if = "Option::is_none")]
    pub context_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The ordered collection of items returned by one search call.
///
/// Deserializes directly from the API response body; a response without an
/// `items` field is a valid empty result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub items: Vec<ImageItem>,
}

impl SearchResult {
    /// Create a result from a list of items
    pub fn with_items(items: Vec<ImageItem>) -> Self {
        Self { items }
    }

    /// Number of items in the result
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the result carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in response order
    pub fn iter(&self) -> std::slice::Iter<'_, ImageItem> {
        self.items.iter()
    }
}

/// Errors a search call can surface.
///
/// Callers decide what to show; the web layer funnels all of these into a
/// single log line and leaves the display untouched.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body was not the expected JSON
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured endpoint is not a valid URL
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
