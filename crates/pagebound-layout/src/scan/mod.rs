//! Per-page boundary scanners.
//!
//! Both detection methods implement one [`EdgeScanner`] contract so the
//! aggregator stays method-agnostic and further methods can be added without
//! touching aggregation. Scanners are pure functions of
//! (page, configuration, rules); the shared [`SpacingRules`] is passed in
//! explicitly, never held as ambient state.

mod contextual;
mod zone;

pub use contextual::ContextualScanner;
pub use zone::ZoneScanner;

use pagebound_core::Page;

use crate::spacing::SpacingRules;
use crate::types::{BoundaryCandidate, DetectionMethod};

/// One boundary detection method
///
/// `scan_page` emits zero or one header candidate and zero or one footer
/// candidate for the page. Emitting nothing is not an error; many pages have
/// no detectable boundary.
pub trait EdgeScanner {
    /// The method tag carried by this scanner's candidates.
    fn method(&self) -> DetectionMethod;

    /// Scan one page and emit its boundary candidates.
    fn scan_page(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Vec<BoundaryCandidate>;
}
