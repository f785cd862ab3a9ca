//! Display surface abstraction
//!
//! The surface is injected into the renderer so rendering stays testable
//! without a live page.

use crate::results::ImageItem;

/// A region that image elements are rendered into
pub trait Surface {
    /// Drop everything currently displayed
    fn clear(&mut self);

    /// Append one image element for the item
    fn append(&mut self, item: &ImageItem);
}

/// Surface that accumulates HTML markup for the results container.
///
/// Each item becomes `<img src="{link}" alt="{title}">`, attributes escaped.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    html: String,
    count: usize,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated markup
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of elements currently displayed
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Surface for HtmlSurface {
    fn clear(&mut self) {
        self.html.clear();
        self.count = 0;
    }

    fn append(&mut self, item: &ImageItem) {
        self.html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_attr(&item.link),
            escape_attr(&item.title)
        ));
        self.count += 1;
    }
}

/// Escape a string for use inside a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
