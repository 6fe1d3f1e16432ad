//! Detection configuration.
//!
//! All knobs carry documented defaults and can be overridden per run via
//! [`DetectionConfigBuilder`]. Lengths are in page-coordinate units, which
//! for typical PDF input means points (1in = 72pt).

use serde::{Deserialize, Serialize};

use crate::error::{BoundaryError, Result};

/// Configuration for one boundary detection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Depth of the fixed header zone measured from the page top (zone method).
    pub header_zone_height: f64,
    /// Depth of the fixed footer zone measured from the page bottom (zone method).
    pub footer_zone_height: f64,
    /// A gap of at least this multiple of the base spacing ends a header/footer
    /// block in the zone method.
    pub large_gap_multiplier: f64,
    /// Gaps between this multiple and the large multiple are ambiguous: they
    /// set a provisional boundary that only survives as the last line in the zone.
    pub small_gap_multiplier: f64,
    /// Candidate coordinates and observed gaps are rounded to this precision
    /// before counting, to merge sub-pixel extraction noise.
    pub coordinate_precision: f64,
    /// Font-size buckets with fewer observed gaps than this fall back to the
    /// global spacing rule.
    pub min_bucket_samples: usize,
    /// Upper bound of same-block line spacing, as a multiple of the bucket's
    /// most common gap.
    pub line_spacing_multiplier: f64,
    /// Upper bound of paragraph-level spacing, as a multiple of the bucket's
    /// most common gap.
    pub para_spacing_multiplier: f64,
    /// SECTION/WIDE split: gaps above `wide_gap_multiplier * para_spacing_max`
    /// classify as WIDE.
    pub wide_gap_multiplier: f64,
    /// Font sizes are rounded to this precision to merge near-identical sizes.
    pub font_bucket_precision: f64,
    /// Fallback page height for pages whose extractor did not report one.
    pub default_page_height: f64,
    /// Fallback base spacing for documents with no measurable gaps, so the
    /// classifier stays total.
    pub default_base_spacing: f64,
}

impl Default for DetectionConfig {
    #[inline]
    fn default() -> Self {
        Self {
            header_zone_height: 90.0,    // 1.25in
            footer_zone_height: 72.0,    // 1.0in
            large_gap_multiplier: 1.8,
            small_gap_multiplier: 1.3,
            coordinate_precision: 0.5,   // 0.5pt
            min_bucket_samples: 3,
            line_spacing_multiplier: 1.3,
            para_spacing_multiplier: 1.8,
            wide_gap_multiplier: 2.0,
            font_bucket_precision: 0.5,  // 0.5pt
            default_page_height: 792.0,  // US Letter
            default_base_spacing: 12.0,
        }
    }
}

impl DetectionConfig {
    /// Start building a configuration from the defaults.
    #[inline]
    #[must_use = "returns a new builder instance"]
    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder::new()
    }
}

/// Builder for [`DetectionConfig`] with validation at `build()` time
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionConfigBuilder {
    config: DetectionConfig,
}

impl DetectionConfigBuilder {
    /// Create a builder seeded with the default configuration.
    #[inline]
    #[must_use = "returns a new builder instance"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header zone depth (page units from the top edge).
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn header_zone_height(mut self, value: f64) -> Self {
        self.config.header_zone_height = value;
        self
    }

    /// Set the footer zone depth (page units from the bottom edge).
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn footer_zone_height(mut self, value: f64) -> Self {
        self.config.footer_zone_height = value;
        self
    }

    /// Set the large gap multiplier for the zone method.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn large_gap_multiplier(mut self, value: f64) -> Self {
        self.config.large_gap_multiplier = value;
        self
    }

    /// Set the small (ambiguous) gap multiplier for the zone method.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn small_gap_multiplier(mut self, value: f64) -> Self {
        self.config.small_gap_multiplier = value;
        self
    }

    /// Set the coordinate rounding precision used by the aggregator.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn coordinate_precision(mut self, value: f64) -> Self {
        self.config.coordinate_precision = value;
        self
    }

    /// Set the minimum gap sample count per font bucket.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn min_bucket_samples(mut self, value: usize) -> Self {
        self.config.min_bucket_samples = value;
        self
    }

    /// Set the same-block line spacing multiplier.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn line_spacing_multiplier(mut self, value: f64) -> Self {
        self.config.line_spacing_multiplier = value;
        self
    }

    /// Set the paragraph spacing multiplier.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn para_spacing_multiplier(mut self, value: f64) -> Self {
        self.config.para_spacing_multiplier = value;
        self
    }

    /// Set the SECTION/WIDE split multiplier.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn wide_gap_multiplier(mut self, value: f64) -> Self {
        self.config.wide_gap_multiplier = value;
        self
    }

    /// Set the font-size bucketing precision.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn font_bucket_precision(mut self, value: f64) -> Self {
        self.config.font_bucket_precision = value;
        self
    }

    /// Set the fallback page height.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn default_page_height(mut self, value: f64) -> Self {
        self.config.default_page_height = value;
        self
    }

    /// Set the fallback base spacing.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub const fn default_base_spacing(mut self, value: f64) -> Self {
        self.config.default_base_spacing = value;
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Config`] when a length or precision is not
    /// strictly positive, when `small_gap_multiplier` exceeds
    /// `large_gap_multiplier`, when the spacing multipliers are not ordered
    /// `line <= para`, when `wide_gap_multiplier < 1`, or when
    /// `min_bucket_samples` is zero.
    pub fn build(self) -> Result<DetectionConfig> {
        let c = self.config;

        let positive = [
            ("header_zone_height", c.header_zone_height),
            ("footer_zone_height", c.footer_zone_height),
            ("large_gap_multiplier", c.large_gap_multiplier),
            ("small_gap_multiplier", c.small_gap_multiplier),
            ("coordinate_precision", c.coordinate_precision),
            ("line_spacing_multiplier", c.line_spacing_multiplier),
            ("para_spacing_multiplier", c.para_spacing_multiplier),
            ("font_bucket_precision", c.font_bucket_precision),
            ("default_page_height", c.default_page_height),
            ("default_base_spacing", c.default_base_spacing),
        ];
        for (name, value) in positive {
            if value <= 0.0 || value.is_nan() {
                return Err(BoundaryError::Config {
                    reason: format!("{name} must be positive, got {value}"),
                });
            }
        }

        if c.small_gap_multiplier > c.large_gap_multiplier {
            return Err(BoundaryError::Config {
                reason: format!(
                    "small_gap_multiplier ({}) must not exceed large_gap_multiplier ({})",
                    c.small_gap_multiplier, c.large_gap_multiplier
                ),
            });
        }
        if c.line_spacing_multiplier > c.para_spacing_multiplier {
            return Err(BoundaryError::Config {
                reason: format!(
                    "line_spacing_multiplier ({}) must not exceed para_spacing_multiplier ({})",
                    c.line_spacing_multiplier, c.para_spacing_multiplier
                ),
            });
        }
        if c.wide_gap_multiplier < 1.0 || c.wide_gap_multiplier.is_nan() {
            return Err(BoundaryError::Config {
                reason: format!(
                    "wide_gap_multiplier must be at least 1.0, got {}",
                    c.wide_gap_multiplier
                ),
            });
        }
        if c.min_bucket_samples == 0 {
            return Err(BoundaryError::Config {
                reason: "min_bucket_samples must be at least 1".to_string(),
            });
        }

        Ok(c)
    }
}
