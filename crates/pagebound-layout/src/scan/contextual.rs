//! Contextual scanner (method B): adaptive, spacing-rule-driven edge scan.
//!
//! Instead of assuming a fixed zone depth, this method asks where the
//! spacing pattern departs from the body-text norm learned for the line's
//! own font size. The first SECTION or WIDE gap from each edge marks the
//! boundary.

use pagebound_core::Page;

use crate::spacing::SpacingRules;
use crate::types::{BoundaryCandidate, DetectionMethod, Edge};

use super::EdgeScanner;

/// Scans top-down and bottom-up for the first block-ending gap.
///
/// All thresholds come from the learned spacing rules passed into each
/// scan, so the scanner itself carries no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextualScanner;

impl ContextualScanner {
    /// Create a contextual scanner.
    #[inline]
    #[must_use = "returns a new scanner instance"]
    pub const fn new() -> Self {
        Self
    }

    fn scan_header(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Option<BoundaryCandidate> {
        for (line, next) in page.lines.iter().zip(page.lines.iter().skip(1)) {
            let gap = line.gap_to(next);
            let category = rules.classify(gap, line.font_size);
            if category.ends_block() {
                return Some(BoundaryCandidate {
                    page_index,
                    edge: Edge::Header,
                    method: DetectionMethod::Contextual,
                    y: line.bottom,
                    gap,
                    category,
                });
            }
        }
        None
    }

    fn scan_footer(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Option<BoundaryCandidate> {
        for i in (1..page.lines.len()).rev() {
            let line = &page.lines[i];
            let prev = &page.lines[i - 1];
            let gap = prev.gap_to(line);
            let category = rules.classify(gap, line.font_size);
            if category.ends_block() {
                return Some(BoundaryCandidate {
                    page_index,
                    edge: Edge::Footer,
                    method: DetectionMethod::Contextual,
                    y: line.top,
                    gap,
                    category,
                });
            }
        }
        None
    }
}

impl EdgeScanner for ContextualScanner {
    #[inline]
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Contextual
    }

    fn scan_page(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Vec<BoundaryCandidate> {
        let mut candidates = Vec::with_capacity(2);
        candidates.extend(self.scan_header(page, page_index, rules));
        candidates.extend(self.scan_footer(page, page_index, rules));
        candidates
    }
}
