//! Document geometry: lines, pages, documents.
//!
//! These types are produced by an upstream extraction collaborator and are
//! read-only inputs to the layout engine. The extractor guarantees
//! well-formed geometry (`bottom >= top`, consistent units); this crate does
//! not re-validate it.

use serde::{Deserialize, Serialize};

/// A positioned line of text on one page.
///
/// Vertical coordinates are page-local with the origin at the top of the
/// page, so `top < bottom` for every well-formed line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Top edge of the line's bounding box.
    pub top: f64,
    /// Bottom edge of the line's bounding box.
    pub bottom: f64,
    /// Predominant font size among the line's text runs.
    pub font_size: f64,
}

impl Line {
    /// Create a new line.
    #[inline]
    #[must_use = "returns a new Line instance"]
    pub const fn new(top: f64, bottom: f64, font_size: f64) -> Self {
        Self {
            top,
            bottom,
            font_size,
        }
    }

    /// Height of the line's bounding box.
    #[inline]
    #[must_use = "returns the line height"]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical gap from the bottom of this line to the top of `next`.
    ///
    /// Negative for overlapping lines; callers decide how to treat those.
    #[inline]
    #[must_use = "returns the inter-line gap"]
    pub fn gap_to(&self, next: &Self) -> f64 {
        next.top - self.bottom
    }
}

/// One page: its lines in top-to-bottom order, plus the page height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Lines ordered top-to-bottom by `top`.
    pub lines: Vec<Line>,
    /// Page height in page units. `None` when the extractor could not
    /// determine it; consumers fall back to a configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Page {
    /// Create a page, keeping lines sorted top-to-bottom by `top`.
    #[must_use = "returns a new Page instance"]
    pub fn new(mut lines: Vec<Line>, height: Option<f64>) -> Self {
        lines.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap_or(std::cmp::Ordering::Equal));
        Self { lines, height }
    }

    /// True when the page carries no lines at all.
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the page"]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A whole document: pages in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document from pages in reading order.
    #[inline]
    #[must_use = "returns a new Document instance"]
    pub const fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Iterate over every line in the document, page by page.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}
