//! Boundary detection engine: wires statistics, scanners, and aggregation.

use log::debug;
use pagebound_core::Document;
use rayon::prelude::*;
use serde::Serialize;

use crate::aggregate::CandidateAggregator;
use crate::config::DetectionConfig;
use crate::scan::{ContextualScanner, EdgeScanner, ZoneScanner};
use crate::spacing::SpacingRules;
use crate::types::{BoundaryCandidate, BoundaryResult, DetectionMethod, Edge};

/// Header/footer boundary detection engine
///
/// A detection run builds the document's spacing rules once, scans every
/// page with both methods, and aggregates the candidates into one
/// [`BoundaryResult`] per (edge, method). Pages are scanned in parallel;
/// each worker accumulates a partial aggregator that is merged in a final
/// reduction, so results are independent of scheduling.
///
/// Detection never fails: pages without candidates simply contribute
/// nothing, and an edge with no candidates anywhere reports as undetermined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEngine {
    config: DetectionConfig,
}

impl Default for BoundaryEngine {
    #[inline]
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl BoundaryEngine {
    /// Create an engine with the given configuration.
    #[inline]
    #[must_use = "returns a new engine instance"]
    pub const fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the default configuration.
    #[inline]
    #[must_use = "returns a new engine instance"]
    pub fn with_defaults() -> Self {
        Self::new(DetectionConfig::default())
    }

    /// The configuration this engine runs with.
    #[inline]
    #[must_use = "this method returns the configuration, not modifying the engine"]
    pub const fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect header and footer boundaries for a whole document.
    #[must_use = "returns the detection report"]
    pub fn detect(&self, document: &Document) -> DetectionReport {
        let rules = SpacingRules::build(document, &self.config);
        let zone = ZoneScanner::new(self.config);
        let contextual = ContextualScanner::new();
        let precision = self.config.coordinate_precision;

        let (aggregator, mut candidates) = document
            .pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| {
                let mut page_candidates = zone.scan_page(page, index, &rules);
                page_candidates.extend(contextual.scan_page(page, index, &rules));
                page_candidates
            })
            .fold(
                || (CandidateAggregator::new(precision), Vec::new()),
                |(mut agg, mut all), page_candidates| {
                    for candidate in &page_candidates {
                        agg.record(candidate);
                    }
                    all.extend(page_candidates);
                    (agg, all)
                },
            )
            .reduce(
                || (CandidateAggregator::new(precision), Vec::new()),
                |(agg_a, mut cands_a), (agg_b, cands_b)| {
                    cands_a.extend(cands_b);
                    (agg_a.merge(agg_b), cands_a)
                },
            );

        // Reduction order is scheduler-dependent; sort so the exposed
        // candidate list is deterministic.
        candidates.sort_by(|a, b| {
            a.page_index
                .cmp(&b.page_index)
                .then_with(|| slot_order(a).cmp(&slot_order(b)))
                .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        });

        debug!(
            "detection run: {} pages, {} candidates, {} font buckets",
            document.pages.len(),
            candidates.len(),
            rules.bucket_count()
        );

        DetectionReport {
            results: aggregator.into_results(),
            candidates,
            rules,
        }
    }
}

#[inline]
fn slot_order(candidate: &BoundaryCandidate) -> u8 {
    match (candidate.edge, candidate.method) {
        (Edge::Header, DetectionMethod::Zone) => 0,
        (Edge::Header, DetectionMethod::Contextual) => 1,
        (Edge::Footer, DetectionMethod::Zone) => 2,
        (Edge::Footer, DetectionMethod::Contextual) => 3,
    }
}

/// Everything one detection run produced
///
/// Carries the four per-(edge, method) results, the raw candidate list for
/// visualization and debugging, and the spacing rules the run learned.
/// Downstream code decides how to reconcile the two methods; [`best`] is
/// only a convenience, not an imposed merge policy.
///
/// [`best`]: DetectionReport::best
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    results: Vec<BoundaryResult>,
    candidates: Vec<BoundaryCandidate>,
    rules: SpacingRules,
}

impl DetectionReport {
    /// The result for one (edge, method) combination.
    ///
    /// # Panics
    ///
    /// Never panics in practice: a report always carries all four
    /// combinations.
    #[must_use = "this method returns the result, not modifying the report"]
    pub fn result(&self, edge: Edge, method: DetectionMethod) -> &BoundaryResult {
        self.results
            .iter()
            .find(|r| r.edge == edge && r.method == method)
            .expect("report carries all four edge/method results")
    }

    /// All four results, header before footer, zone before contextual.
    #[inline]
    #[must_use = "this method returns the results, not modifying the report"]
    pub fn results(&self) -> &[BoundaryResult] {
        &self.results
    }

    /// The determined result with the higher confidence for an edge, if any.
    ///
    /// Ties prefer the contextual method, which adapts to the document
    /// rather than assuming a zone depth.
    #[must_use = "this method returns the result, not modifying the report"]
    pub fn best(&self, edge: Edge) -> Option<&BoundaryResult> {
        let zone = self.result(edge, DetectionMethod::Zone);
        let contextual = self.result(edge, DetectionMethod::Contextual);
        match (zone.confidence(), contextual.confidence()) {
            (Some(z), Some(c)) => Some(if z > c { zone } else { contextual }),
            (Some(_), None) => Some(zone),
            (None, Some(_)) => Some(contextual),
            (None, None) => None,
        }
    }

    /// Every candidate produced during the run, in deterministic order.
    #[inline]
    #[must_use = "this method returns the candidates, not modifying the report"]
    pub fn candidates(&self) -> &[BoundaryCandidate] {
        &self.candidates
    }

    /// The spacing rules learned from the document.
    #[inline]
    #[must_use = "this method returns the rules, not modifying the report"]
    pub const fn spacing_rules(&self) -> &SpacingRules {
        &self.rules
    }
}
