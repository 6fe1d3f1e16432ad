//! Cross-page candidate aggregation.
//!
//! A pure reduction over already-produced candidates: coordinates are
//! rounded to the configured precision, counted per (edge, method), and the
//! most frequent value wins with ties going to the smallest coordinate. The
//! merge is commutative and associative, so per-worker partial aggregators
//! reduce cleanly in any order.

use rustc_hash::FxHashMap;

use crate::spacing::quantize;
use crate::types::{
    BoundaryCandidate, BoundaryEstimate, BoundaryResult, DetectionMethod, Edge,
};

/// Frequency histogram of rounded boundary coordinates
#[derive(Debug, Clone, Default, PartialEq)]
struct YHistogram {
    counts: FxHashMap<i64, u32>,
    total: u32,
}

impl YHistogram {
    fn record(&mut self, key: i64) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    fn merge(&mut self, other: Self) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Most frequent key; ties break to the smallest key so the result is
    /// independent of insertion order.
    fn resolve(&self) -> Option<(i64, u32)> {
        self.counts
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(kb.cmp(ka)))
            .map(|(key, count)| (*key, *count))
    }
}

/// The four (edge, method) combinations, in the order results are reported.
const SLOTS: [(Edge, DetectionMethod); 4] = [
    (Edge::Header, DetectionMethod::Zone),
    (Edge::Header, DetectionMethod::Contextual),
    (Edge::Footer, DetectionMethod::Zone),
    (Edge::Footer, DetectionMethod::Contextual),
];

#[inline]
fn slot(edge: Edge, method: DetectionMethod) -> usize {
    match (edge, method) {
        (Edge::Header, DetectionMethod::Zone) => 0,
        (Edge::Header, DetectionMethod::Contextual) => 1,
        (Edge::Footer, DetectionMethod::Zone) => 2,
        (Edge::Footer, DetectionMethod::Contextual) => 3,
    }
}

/// Accumulates candidates into per-(edge, method) histograms
///
/// Aggregators built on separate workers combine with [`merge`]; counting is
/// plain integer addition, so the combined result does not depend on how the
/// work was split.
///
/// [`merge`]: CandidateAggregator::merge
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAggregator {
    precision: f64,
    histograms: [YHistogram; 4],
}

impl CandidateAggregator {
    /// Create an aggregator rounding coordinates to `precision`.
    #[must_use = "returns a new aggregator instance"]
    pub fn new(precision: f64) -> Self {
        Self {
            precision,
            histograms: Default::default(),
        }
    }

    /// Count one candidate.
    pub fn record(&mut self, candidate: &BoundaryCandidate) {
        let key = quantize(candidate.y, self.precision);
        self.histograms[slot(candidate.edge, candidate.method)].record(key);
    }

    /// Combine with another partial aggregator (commutative, associative).
    #[must_use = "merge consumes both aggregators and returns the combined one"]
    pub fn merge(mut self, other: Self) -> Self {
        let [a, b, c, d] = other.histograms;
        self.histograms[0].merge(a);
        self.histograms[1].merge(b);
        self.histograms[2].merge(c);
        self.histograms[3].merge(d);
        self
    }

    /// Produce the four boundary results.
    ///
    /// A slot with no candidates yields an undetermined result, never a
    /// defaulted coordinate.
    #[must_use = "returns the aggregated boundary results"]
    pub fn into_results(self) -> Vec<BoundaryResult> {
        SLOTS
            .iter()
            .map(|&(edge, method)| {
                let histogram = &self.histograms[slot(edge, method)];
                let boundary = histogram.resolve().map(|(key, support)| BoundaryEstimate {
                    y: key as f64 * self.precision,
                    support_count: support,
                    confidence: f64::from(support) / f64::from(histogram.total),
                });
                BoundaryResult {
                    edge,
                    method,
                    total_candidates: histogram.total,
                    boundary,
                }
            })
            .collect()
    }
}
