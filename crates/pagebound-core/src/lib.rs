//! # Pagebound Core - Shared Document Geometry Model
//!
//! Read-only geometry types consumed by the `pagebound-layout` detection
//! engine: positioned text lines, pages, and whole documents.
//!
//! All coordinates are page-local with the origin at the top-left, in
//! whatever unit the upstream extractor produced (typically PDF points).
//! No unit conversion happens here or downstream.
//!
//! ## Usage
//!
//! ```
//! use pagebound_core::{Document, Line, Page};
//!
//! let page = Page::new(
//!     vec![
//!         Line::new(72.0, 84.0, 12.0),
//!         Line::new(98.0, 110.0, 12.0),
//!     ],
//!     Some(792.0),
//! );
//! let doc = Document::new(vec![page]);
//! assert_eq!(doc.pages.len(), 1);
//! ```

mod document;

pub use document::{Document, Line, Page};
