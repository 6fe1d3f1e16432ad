//! Spacing statistics and contextual gap classification.
//!
//! A single pass over the document's lines learns, per font-size bucket, the
//! typical inter-line gap and the thresholds derived from it. The resulting
//! [`SpacingRules`] value is immutable, `Sync`, and passed explicitly into
//! every scanner call so per-page scanning stays a pure function of
//! (page, config, rules).

use log::debug;
use pagebound_core::{Document, Line};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::DetectionConfig;
use crate::types::GapCategory;

/// Quantize a coordinate or gap to an integer key at the given precision.
///
/// Integer keys keep histogram and bucket maps cheap to hash and make
/// tie-breaking deterministic.
#[inline]
pub(crate) fn quantize(value: f64, precision: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)] // page coordinates are tiny relative to i64
    let key = (value / precision).round() as i64;
    key
}

/// Observed range of same-block line spacing for one font bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRange {
    /// Smallest observed gap classified as same-block spacing.
    pub min: f64,
    /// Upper bound for same-block spacing.
    pub max: f64,
}

/// Per-font-bucket spacing thresholds
///
/// Invariant (by construction): `line_spacing.max <= para_spacing_max`.
/// Categories nest; they never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingRule {
    /// Range of gaps treated as ordinary line spacing.
    pub line_spacing: GapRange,
    /// Upper bound for paragraph-level gaps.
    pub para_spacing_max: f64,
    /// Mode of the observed gap distribution for this bucket.
    pub most_common_gap: f64,
}

impl SpacingRule {
    /// Derive a rule from a bucket's modal gap and smallest observed gap.
    ///
    /// A non-positive mode (touching lines, or no samples at all) is replaced
    /// by the configured default base spacing so thresholds stay usable.
    fn from_mode(mode: f64, observed_min: f64, config: &DetectionConfig) -> Self {
        let mode = if mode > 0.0 {
            mode
        } else {
            config.default_base_spacing
        };
        let line_max = config.line_spacing_multiplier * mode;
        // Widen rather than let observed data break the nesting invariant.
        let para_max = (config.para_spacing_multiplier * mode).max(line_max);
        Self {
            line_spacing: GapRange {
                min: observed_min.min(line_max).max(0.0),
                max: line_max,
            },
            para_spacing_max: para_max,
            most_common_gap: mode,
        }
    }
}

/// Gap histogram for one bucket while statistics are being collected.
#[derive(Debug, Default)]
struct GapSamples {
    counts: FxHashMap<i64, u32>,
    total: u32,
    min: f64,
}

impl GapSamples {
    fn record(&mut self, gap: f64, precision: f64) {
        *self.counts.entry(quantize(gap, precision)).or_insert(0) += 1;
        if self.total == 0 || gap < self.min {
            self.min = gap;
        }
        self.total += 1;
    }

    /// Modal gap, ties broken by the smallest value.
    fn mode(&self, precision: f64) -> Option<f64> {
        self.counts
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(kb.cmp(ka)))
            .map(|(key, _)| *key as f64 * precision)
    }
}

/// Document-wide spacing rules: one per font bucket plus a global fallback
///
/// Built once per analysis run and read-only afterwards, so it can be shared
/// across parallel page scans without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingRules {
    rules: FxHashMap<i64, SpacingRule>,
    fallback: SpacingRule,
    base_spacing: f64,
    font_bucket_precision: f64,
    wide_gap_multiplier: f64,
}

impl SpacingRules {
    /// Scan all lines of `document` once and build the per-bucket rules.
    ///
    /// Gaps are measured from each line to the next line *on the same page*
    /// with the same font bucket; the last such line of a page contributes no
    /// gap. Negative gaps (overlapping lines) are extraction noise and are
    /// skipped.
    #[must_use = "returns the built spacing rules"]
    pub fn build(document: &Document, config: &DetectionConfig) -> Self {
        let precision = config.coordinate_precision;
        let mut per_bucket: FxHashMap<i64, GapSamples> = FxHashMap::default();
        let mut combined = GapSamples::default();
        let mut adjacent = GapSamples::default();

        for page in &document.pages {
            for pair in page.lines.windows(2) {
                let gap = pair[0].gap_to(&pair[1]);
                if gap >= 0.0 {
                    adjacent.record(gap, precision);
                }
            }

            let mut last_in_bucket: FxHashMap<i64, Line> = FxHashMap::default();
            for line in &page.lines {
                let bucket = bucket_key(line.font_size, config.font_bucket_precision);
                if let Some(prev) = last_in_bucket.insert(bucket, *line) {
                    let gap = prev.gap_to(line);
                    if gap >= 0.0 {
                        per_bucket.entry(bucket).or_default().record(gap, precision);
                        combined.record(gap, precision);
                    }
                }
            }
        }

        let fallback = SpacingRule::from_mode(
            combined.mode(precision).unwrap_or(config.default_base_spacing),
            combined.min,
            config,
        );

        let mut rules = FxHashMap::default();
        for (bucket, samples) in &per_bucket {
            if samples.total < config.min_bucket_samples as u32 {
                debug!(
                    "font bucket {} has {} gap samples (< {}), using fallback rule",
                    *bucket as f64 * config.font_bucket_precision,
                    samples.total,
                    config.min_bucket_samples
                );
                continue;
            }
            if let Some(mode) = samples.mode(precision) {
                rules.insert(*bucket, SpacingRule::from_mode(mode, samples.min, config));
            }
        }

        let base_spacing = adjacent
            .mode(precision)
            .filter(|m| *m > 0.0)
            .unwrap_or(config.default_base_spacing);

        debug!(
            "built spacing rules: {} buckets, base spacing {:.2}",
            rules.len(),
            base_spacing
        );

        Self {
            rules,
            fallback,
            base_spacing,
            font_bucket_precision: config.font_bucket_precision,
            wide_gap_multiplier: config.wide_gap_multiplier,
        }
    }

    /// Document-wide most common adjacent-line gap (the zone method's scalar).
    #[inline]
    #[must_use = "this method returns the base spacing, not modifying the rules"]
    pub const fn base_spacing(&self) -> f64 {
        self.base_spacing
    }

    /// Rule for a font size, falling back to the global rule for buckets
    /// without enough samples.
    #[inline]
    #[must_use = "this method returns the rule, not modifying the rules"]
    pub fn rule_for(&self, font_size: f64) -> &SpacingRule {
        self.rules
            .get(&bucket_key(font_size, self.font_bucket_precision))
            .unwrap_or(&self.fallback)
    }

    /// Classify a gap produced by a line of the given font size.
    ///
    /// Deterministic and total: every gap maps to exactly one category.
    /// Gaps at or below the line-spacing bound (including negatives from
    /// overlapping lines) are LINE.
    #[must_use = "this method returns the gap category, not modifying the rules"]
    pub fn classify(&self, gap: f64, font_size: f64) -> GapCategory {
        let rule = self.rule_for(font_size);
        if gap <= rule.line_spacing.max {
            GapCategory::Line
        } else if gap <= rule.para_spacing_max {
            GapCategory::Para
        } else if gap <= self.wide_gap_multiplier * rule.para_spacing_max {
            GapCategory::Section
        } else {
            GapCategory::Wide
        }
    }

    /// Number of font buckets with their own rule.
    #[inline]
    #[must_use = "this method returns the bucket count, not modifying the rules"]
    pub fn bucket_count(&self) -> usize {
        self.rules.len()
    }
}

/// Round a font size to its bucket key.
#[inline]
fn bucket_key(font_size: f64, precision: f64) -> i64 {
    quantize(font_size, precision)
}
