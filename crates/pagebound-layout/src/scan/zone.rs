//! Zone scanner (method A): fixed-depth edge zones with gap-multiplier rules.

use log::debug;
use pagebound_core::Page;

use crate::config::DetectionConfig;
use crate::spacing::SpacingRules;
use crate::types::{BoundaryCandidate, DetectionMethod, Edge};

use super::EdgeScanner;

/// Scans fixed-distance zones from the page top and bottom.
///
/// A gap of at least `large_gap_multiplier * base_spacing` ends the
/// header/footer block immediately. Gaps between the small and large
/// multiplier are ambiguous: they set a provisional boundary that is kept
/// only when it belongs to the last line examined in the zone, so a clearer
/// large gap deeper in the zone always wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneScanner {
    config: DetectionConfig,
}

impl ZoneScanner {
    /// Create a zone scanner for the given configuration.
    #[inline]
    #[must_use = "returns a new scanner instance"]
    pub const fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    fn candidate(
        &self,
        page_index: usize,
        edge: Edge,
        y: f64,
        gap: f64,
        font_size: f64,
        rules: &SpacingRules,
    ) -> BoundaryCandidate {
        BoundaryCandidate {
            page_index,
            edge,
            method: DetectionMethod::Zone,
            y,
            gap,
            category: rules.classify(gap, font_size),
        }
    }

    fn scan_header(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Option<BoundaryCandidate> {
        let base = rules.base_spacing();
        let large = self.config.large_gap_multiplier * base;
        let small = self.config.small_gap_multiplier * base;

        // (y, gap, font_size) of the most recent ambiguous gap, plus whether
        // it came from the last line examined so far.
        let mut provisional: Option<(f64, f64, f64)> = None;
        let mut provisional_is_last = false;

        for (i, line) in page.lines.iter().enumerate() {
            if line.top >= self.config.header_zone_height {
                break;
            }
            let Some(next) = page.lines.get(i + 1) else {
                break; // last line of the page: no gap to measure
            };
            let gap = line.gap_to(next);
            if gap >= large {
                return Some(self.candidate(
                    page_index,
                    Edge::Header,
                    line.bottom,
                    gap,
                    line.font_size,
                    rules,
                ));
            }
            if gap >= small {
                provisional = Some((line.bottom, gap, line.font_size));
                provisional_is_last = true;
            } else {
                provisional_is_last = false;
            }
        }

        if provisional_is_last {
            provisional
                .map(|(y, gap, font)| self.candidate(page_index, Edge::Header, y, gap, font, rules))
        } else {
            None
        }
    }

    fn scan_footer(
        &self,
        page: &Page,
        page_index: usize,
        rules: &SpacingRules,
    ) -> Option<BoundaryCandidate> {
        let page_height = page.height.unwrap_or_else(|| {
            debug!(
                "page {page_index} has no height, falling back to {}",
                self.config.default_page_height
            );
            self.config.default_page_height
        });
        let zone_start = page_height - self.config.footer_zone_height;

        let base = rules.base_spacing();
        let large = self.config.large_gap_multiplier * base;
        let small = self.config.small_gap_multiplier * base;

        let mut provisional: Option<(f64, f64, f64)> = None;
        let mut provisional_is_last = false;

        for (i, line) in page.lines.iter().enumerate().rev() {
            if line.bottom <= zone_start {
                break;
            }
            if i == 0 {
                break; // topmost line of the page: no preceding gap
            }
            let prev = &page.lines[i - 1];
            let gap = prev.gap_to(line);
            if gap >= large {
                return Some(self.candidate(
                    page_index,
                    Edge::Footer,
                    line.top,
                    gap,
                    line.font_size,
                    rules,
                ));
            }
            if gap >= small {
                provisional = Some((line.top, gap, line.font_size));
                provisional_is_last = true;
            } else {
                provisional_is_last = false;
            }
        }

        if provisional_is_last {
            provisional
                .map(|(y, gap, font)| self.candidate(page_index, Edge::Footer, y, gap, font, rules))
        } else {
            None
        }
    }
}

impl EdgeScanner for ZoneScanner {
    #[inline]
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Zone
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

#[cfg(test)]
mod tests {
    use super::*;
    use pagebound_core::{Document, Line, Page};

    /// Base spacing 6pt: ambiguous band is [7.8, 10.8), large is >= 10.8.
    fn rules_with_base_6() -> SpacingRules {
        let lines = (0..10)
            .map(|i| {
                let top = 300.0 + 18.0 * f64::from(i);
                Line::new(top, top + 12.0, 12.0)
            })
            .collect();
        let doc = Document::new(vec![Page::new(lines, Some(792.0))]);
        SpacingRules::build(&doc, &DetectionConfig::default())
    }

    fn scanner() -> ZoneScanner {
        ZoneScanner::new(DetectionConfig::default())
    }

    fn page_with(lines: Vec<Line>) -> Page {
        Page::new(lines, Some(792.0))
    }

    #[test]
    fn test_header_large_gap_emits_line_bottom() {
        let rules = rules_with_base_6();
        let page = page_with(vec![
            Line::new(20.0, 40.0, 14.0),
            Line::new(240.0, 252.0, 12.0), // gap 200 >= 10.8
        ]);
        let cands = scanner().scan_page(&page, 0, &rules);
        let header = cands.iter().find(|c| c.edge == Edge::Header).unwrap();
        assert!((header.y - 40.0).abs() < 1e-9);
        assert!((header.gap - 200.0).abs() < 1e-9);
        assert_eq!(header.method, DetectionMethod::Zone);
    }

    #[test]
    fn test_header_stops_outside_zone() {
        let rules = rules_with_base_6();
        // First line starts below the 90pt header zone.
        let page = page_with(vec![
            Line::new(100.0, 112.0, 12.0),
            Line::new(400.0, 412.0, 12.0),
        ]);
        let cands = scanner().scan_page(&page, 0, &rules);
        assert!(cands.iter().all(|c| c.edge != Edge::Header));
    }

    #[test]
    fn test_header_ambiguous_overwritten_by_deeper_large_gap() {
        let rules = rules_with_base_6();
        let page = page_with(vec![
            Line::new(20.0, 32.0, 12.0),
            Line::new(41.0, 53.0, 12.0),   // gap 9.0: ambiguous, provisional at 32
            Line::new(200.0, 212.0, 12.0), // gap 147 from the line above: large
        ]);
        // The large gap deeper in the zone wins over the provisional.
        let cands = scanner().scan_page(&page, 0, &rules);
        let header = cands.iter().find(|c| c.edge == Edge::Header).unwrap();
        assert!((header.y - 53.0).abs() < 1e-9);
    }

    #[test]
    fn test_header_ambiguous_followed_by_small_is_suppressed() {
        let rules = rules_with_base_6();
        // Ambiguous gap, then ordinary line spacing until the zone ends:
        // the provisional no longer belongs to the last line examined.
        let page = page_with(vec![
            Line::new(20.0, 32.0, 12.0),
            Line::new(41.0, 53.0, 12.0), // gap 9.0: ambiguous
            Line::new(59.0, 71.0, 12.0), // gap 6.0: same block
            Line::new(77.0, 89.0, 12.0), // gap 6.0: same block, top 77 < 90
            Line::new(95.0, 107.0, 12.0),
        ]);
        let cands = scanner().scan_page(&page, 0, &rules);
        assert!(cands.iter().all(|c| c.edge != Edge::Header));
    }

    #[test]
    fn test_header_ambiguous_before_page_end_emits() {
        let rules = rules_with_base_6();
        // The ambiguous gap is the only gap on the page, so its line is the
        // last one examined in the zone.
        let page = page_with(vec![
            Line::new(20.0, 32.0, 12.0),
            Line::new(41.0, 53.0, 12.0), // gap 9.0: ambiguous
        ]);
        let cands = scanner().scan_page(&page, 0, &rules);
        let header = cands.iter().find(|c| c.edge == Edge::Header).unwrap();
        assert!((header.y - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_header_ambiguous_with_zone_exit_before_next_gap() {
        // Tighter zone so the ambiguous gap really is the last one checked.
        let config = DetectionConfig::builder()
            .header_zone_height(40.0)
            .build()
            .unwrap();
        let rules = rules_with_base_6();
        let page = page_with(vec![
            Line::new(20.0, 32.0, 12.0), // top 20 < 40: checked, gap 9.0 ambiguous
            Line::new(41.0, 53.0, 12.0), // top 41 >= 40: not checked
            Line::new(59.0, 71.0, 12.0),
        ]);
        let cands = ZoneScanner::new(config).scan_page(&page, 0, &rules);
        let header = cands.iter().find(|c| c.edge == Edge::Header).unwrap();
        assert!((header.y - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_footer_large_gap_emits_line_top() {
        let rules = rules_with_base_6();
        let page = page_with(vec![
            Line::new(500.0, 512.0, 12.0),
            Line::new(740.0, 752.0, 10.0), // bottom 752 > 720, gap 228
        ]);
        let cands = scanner().scan_page(&page, 3, &rules);
        let footer = cands.iter().find(|c| c.edge == Edge::Footer).unwrap();
        assert!((footer.y - 740.0).abs() < 1e-9);
        assert_eq!(footer.page_index, 3);
    }

    #[test]
    fn test_footer_outside_zone_no_candidate() {
        let rules = rules_with_base_6();
        // Lowest line ends at 600, well above the 720 zone start.
        let page = page_with(vec![
            Line::new(300.0, 312.0, 12.0),
            Line::new(588.0, 600.0, 12.0),
        ]);
        let cands = scanner().scan_page(&page, 0, &rules);
        assert!(cands.iter().all(|c| c.edge != Edge::Footer));
    }

    #[test]
    fn test_footer_missing_height_uses_default() {
        let rules = rules_with_base_6();
        let page = Page::new(
            vec![
                Line::new(500.0, 512.0, 12.0),
                Line::new(740.0, 752.0, 10.0),
            ],
            None,
        );
        let cands = scanner().scan_page(&page, 0, &rules);
        assert!(cands.iter().any(|c| c.edge == Edge::Footer));
    }

    #[test]
    fn test_single_line_page_emits_nothing() {
        let rules = rules_with_base_6();
        let page = page_with(vec![Line::new(20.0, 32.0, 12.0)]);
        assert!(scanner().scan_page(&page, 0, &rules).is_empty());
    }

    #[test]
    fn test_empty_page_emits_nothing() {
        let rules = rules_with_base_6();
        let page = page_with(Vec::new());
        assert!(scanner().scan_page(&page, 0, &rules).is_empty());
    }
}
