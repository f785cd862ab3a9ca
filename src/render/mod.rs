//! Rendering module
//!
//! Owns the display surface lifecycle: results are rendered clear-then-append
//! in response order, and a token sequence turns the classic stale-response
//! race into an explicit last-request-wins policy.

mod surface;

pub use surface::{HtmlSurface, Surface};

use crate::results::SearchResult;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Token identifying one search attempt against a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

/// Monotonic sequence of search attempts.
///
/// `begin` makes the returned token the current one, invalidating every
/// token issued before it.
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: AtomicU64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt; the returned token becomes the current one
    pub fn begin(&self) -> SearchToken {
        SearchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the token still belongs to the newest attempt
    pub fn is_current(&self, token: SearchToken) -> bool {
        token.0 == self.latest.load(Ordering::SeqCst)
    }
}

/// Renders search results onto a display surface.
///
/// Every render clears the surface first and appends one image element per
/// item in response order, so rendering is idempotent and leaves no stale
/// elements behind.
pub struct Renderer<S: Surface> {
    surface: S,
    sequence: SearchSequence,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            sequence: SearchSequence::new(),
        }
    }

    /// Issue a token for a search about to be dispatched
    pub fn begin(&self) -> SearchToken {
        self.sequence.begin()
    }

    /// Render unconditionally: clear, then append each item in order
    pub fn render(&mut self, result: &SearchResult) {
        self.surface.clear();
        for item in result.iter() {
            self.surface.append(item);
        }
    }

    /// Render only if the token is still current.
    ///
    /// Returns whether the result was applied. A stale token means a newer
    /// search superseded this one; its response is discarded and the surface
    /// keeps whatever the newest committed search put there.
    pub fn commit(&mut self, token: SearchToken, result: &SearchResult) -> bool {
        if !self.sequence.is_current(token) {
            debug!("discarding superseded search response");
            return false;
        }
        self.render(result);
        true
    }

    /// The surface being rendered to
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
