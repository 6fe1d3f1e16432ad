//! Shared types for boundary detection: edges, methods, gap categories,
//! per-page candidates, and the aggregated per-edge results.
//!
//! Everything here is serde-serializable so candidate sets and results can
//! be dumped as JSON for fixtures and visual debugging.

use serde::{Deserialize, Serialize};

/// Which page edge a boundary belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Boundary between header material and body content.
    Header,
    /// Boundary between body content and footer material.
    Footer,
}

/// Which scanner produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Fixed-zone scan with gap-multiplier thresholds (method A).
    Zone,
    /// Adaptive scan driven by learned per-font spacing rules (method B).
    Contextual,
}

/// Category of an inter-line gap, ordered by distance from the common case
///
/// `Line < Para < Section < Wide`; SECTION and WIDE gaps end a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    /// Ordinary same-block line spacing.
    Line,
    /// Paragraph-level spacing.
    Para,
    /// Section-level spacing.
    Section,
    /// Wider than any in-flow spacing.
    Wide,
}

impl GapCategory {
    /// True for gaps that terminate a block (SECTION or WIDE).
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the category"]
    pub fn ends_block(self) -> bool {
        self >= Self::Section
    }
}

/// One page's proposed boundary coordinate for one edge
///
/// Produced by a scanner, consumed (and owned) by the aggregator. Never
/// mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCandidate {
    /// Zero-based index of the page that produced this candidate.
    pub page_index: usize,
    /// Edge this candidate proposes a boundary for.
    pub edge: Edge,
    /// Scanner that produced the candidate.
    pub method: DetectionMethod,
    /// Proposed boundary coordinate (page-local, origin at top).
    pub y: f64,
    /// The gap that triggered the candidate.
    pub gap: f64,
    /// Classification of that gap.
    pub category: GapCategory,
}

/// The selected coordinate for one (edge, method), with its support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryEstimate {
    /// Final boundary coordinate, rounded to the configured precision.
    pub y: f64,
    /// Number of candidates that agree with the selected coordinate.
    pub support_count: u32,
    /// `support_count / total_candidates`, in `[0, 1]`.
    pub confidence: f64,
}

/// Terminal output of the engine for one (edge, method) pair
///
/// `boundary == None` is the explicit "undetermined" state: no page produced
/// a candidate for this edge/method. Callers must check it before trusting a
/// coordinate; it is never silently defaulted to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryResult {
    /// Edge this result describes.
    pub edge: Edge,
    /// Method that produced the underlying candidates.
    pub method: DetectionMethod,
    /// Total candidates observed for this edge/method across the document.
    pub total_candidates: u32,
    /// Selected boundary, or `None` when no candidate was ever produced.
    pub boundary: Option<BoundaryEstimate>,
}

impl BoundaryResult {
    /// True when no page contributed a candidate for this edge/method.
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the result"]
    pub const fn is_undetermined(&self) -> bool {
        self.boundary.is_none()
    }

    /// Selected coordinate, if determined.
    #[inline]
    #[must_use = "this method returns the coordinate, not modifying the result"]
    pub fn y(&self) -> Option<f64> {
        self.boundary.map(|b| b.y)
    }

    /// Confidence of the selected coordinate, if determined.
    #[inline]
    #[must_use = "this method returns the confidence, not modifying the result"]
    pub fn confidence(&self) -> Option<f64> {
        self.boundary.map(|b| b.confidence)
    }
}
