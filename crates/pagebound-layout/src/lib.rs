//! # Pagebound Layout - Header/Footer Boundary Detection
//!
//! Locates the header and footer boundaries of a multi-page document whose
//! pages have been reduced to positioned lines of text. Separating body
//! content from repeating header/footer material is a prerequisite for any
//! downstream structural analysis; no boundary is reliably marked in the
//! input, so the engine combines two heuristics and a cross-page consensus:
//!
//! - **Zone method:** fixed-depth zones from each page edge, with a
//!   gap-multiplier rule against the document's base line spacing.
//! - **Contextual method:** per-font-size spacing rules learned from the
//!   document itself; the first SECTION/WIDE gap from each edge marks the
//!   boundary.
//! - **Cross-page aggregation:** per-page candidates are counted in a
//!   rounded-coordinate histogram and the most frequent value wins, with a
//!   confidence score.
//!
//! The engine is a pure, synchronous, CPU-bound computation over an
//! already-materialized [`Document`](pagebound_core::Document). Pages are
//! scanned in parallel with rayon; an async caller should offload the whole
//! run as a single unit of work.
//!
//! ## Quick Start
//!
//! ```
//! use pagebound_core::{Document, Line, Page};
//! use pagebound_layout::{BoundaryEngine, DetectionMethod, Edge};
//!
//! // Three pages: a title line, a body block, a footer line.
//! let pages: Vec<Page> = (0..3)
//!     .map(|_| {
//!         let mut lines = vec![Line::new(20.0, 40.0, 18.0)];
//!         for i in 0..10 {
//!             let top = 240.0 + 18.0 * f64::from(i);
//!             lines.push(Line::new(top, top + 12.0, 12.0));
//!         }
//!         lines.push(Line::new(740.0, 752.0, 10.0));
//!         Page::new(lines, Some(792.0))
//!     })
//!     .collect();
//! let document = Document::new(pages);
//!
//! let report = BoundaryEngine::with_defaults().detect(&document);
//!
//! let header = report.result(Edge::Header, DetectionMethod::Contextual);
//! assert_eq!(header.y(), Some(40.0));
//! assert_eq!(header.confidence(), Some(1.0));
//!
//! let footer = report.result(Edge::Footer, DetectionMethod::Contextual);
//! assert_eq!(footer.y(), Some(740.0));
//! ```
//!
//! ## Configuration
//!
//! All thresholds are overridable per run via [`DetectionConfigBuilder`];
//! building validates the combination:
//!
//! ```
//! use pagebound_layout::{BoundaryEngine, DetectionConfig};
//!
//! # fn main() -> pagebound_layout::Result<()> {
//! let config = DetectionConfig::builder()
//!     .header_zone_height(108.0) // 1.5in
//!     .large_gap_multiplier(2.0)
//!     .build()?;
//! let engine = BoundaryEngine::new(config);
//! # let _ = engine;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Only configuration construction is fallible. A detection run always
//! produces a [`DetectionReport`]; an edge with no candidates anywhere is
//! reported as undetermined (`BoundaryResult::is_undetermined`), never as a
//! defaulted coordinate, so callers must check before trusting a value.

pub mod error;

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod scan;
pub mod spacing;
pub mod types;

pub use error::{BoundaryError, Result};

pub use config::{DetectionConfig, DetectionConfigBuilder};
pub use engine::{BoundaryEngine, DetectionReport};
pub use scan::{ContextualScanner, EdgeScanner, ZoneScanner};
pub use spacing::{GapRange, SpacingRule, SpacingRules};
pub use types::{
    BoundaryCandidate, BoundaryEstimate, BoundaryResult, DetectionMethod, Edge, GapCategory,
};
