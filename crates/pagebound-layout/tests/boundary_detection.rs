//! End-to-end detection scenarios over synthetic documents.

use pagebound_core::{Document, Line, Page};
use pagebound_layout::{
    BoundaryEngine, BoundaryResult, DetectionConfig, DetectionMethod, Edge,
};
use rstest::rstest;

/// Page with a head line ending at `head_bottom`, a 6pt-spaced body block,
/// and a footer line starting at `foot_top`, on a 792pt page.
fn ruled_page(head_bottom: f64, foot_top: f64) -> Page {
    let mut lines = vec![Line::new(head_bottom - 15.0, head_bottom, 14.0)];
    for i in 0..10 {
        let top = 300.0 + 18.0 * f64::from(i);
        lines.push(Line::new(top, top + 12.0, 12.0));
    }
    lines.push(Line::new(foot_top, foot_top + 12.0, 10.0));
    Page::new(lines, Some(792.0))
}

/// Body-only page: first line well below the header zone, last line well
/// above the footer zone, uniform spacing throughout.
fn body_only_page() -> Page {
    let lines = (0..15)
        .map(|i| {
            let top = 150.0 + 18.0 * f64::from(i);
            Line::new(top, top + 12.0, 12.0)
        })
        .collect();
    Page::new(lines, Some(792.0))
}

#[rstest]
#[case(Edge::Header, DetectionMethod::Zone, 100.0)]
#[case(Edge::Header, DetectionMethod::Contextual, 100.0)]
#[case(Edge::Footer, DetectionMethod::Zone, 740.0)]
#[case(Edge::Footer, DetectionMethod::Contextual, 740.0)]
fn uniform_boundaries_give_full_confidence(
    #[case] edge: Edge,
    #[case] method: DetectionMethod,
    #[case] expected_y: f64,
) {
    let doc = Document::new(vec![ruled_page(100.0, 740.0); 3]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    let result = report.result(edge, method);
    assert_eq!(result.y(), Some(expected_y));
    assert_eq!(result.confidence(), Some(1.0));
    assert_eq!(result.total_candidates, 3);
}

#[test]
fn title_and_footer_scenario_contextual() {
    // Each page: title at top=20..bottom=40, a 200pt gap to the body, twelve
    // body lines with uniform 12pt gaps, and a 200pt gap to the footer line.
    let mut pages = Vec::new();
    for _ in 0..3 {
        let mut lines = vec![Line::new(20.0, 40.0, 18.0)];
        let mut top = 240.0;
        for _ in 0..12 {
            lines.push(Line::new(top, top + 12.0, 12.0));
            top += 24.0;
        }
        let foot_top = top - 24.0 + 12.0 + 200.0; // last body bottom + 200
        lines.push(Line::new(foot_top, foot_top + 12.0, 9.0));
        pages.push(Page::new(lines, Some(792.0)));
    }
    let doc = Document::new(pages);

    let report = BoundaryEngine::with_defaults().detect(&doc);

    let header = report.result(Edge::Header, DetectionMethod::Contextual);
    assert_eq!(header.y(), Some(40.0));
    assert_eq!(header.confidence(), Some(1.0));
    assert_eq!(header.total_candidates, 3);

    let footer = report.result(Edge::Footer, DetectionMethod::Contextual);
    assert_eq!(footer.y(), Some(716.0));
    assert_eq!(footer.confidence(), Some(1.0));
    assert_eq!(footer.total_candidates, 3);
}

#[test]
fn body_only_document_is_undetermined() {
    let doc = Document::new(vec![body_only_page(); 4]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    for result in report.results() {
        assert!(result.is_undetermined());
        assert_eq!(result.total_candidates, 0);
        assert_eq!(result.y(), None);
        assert_eq!(result.confidence(), None);
    }
    assert!(report.best(Edge::Header).is_none());
}

#[test]
fn degenerate_pages_do_not_disturb_aggregation() {
    let doc = Document::new(vec![
        ruled_page(100.0, 740.0),
        Page::new(vec![Line::new(20.0, 32.0, 12.0)], Some(792.0)), // single line
        Page::new(Vec::new(), Some(792.0)),                       // empty
        ruled_page(100.0, 740.0),
        ruled_page(100.0, 740.0),
    ]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    // Only the three ruled pages contribute; confidence stays 1.0.
    let header = report.result(Edge::Header, DetectionMethod::Contextual);
    assert_eq!(header.total_candidates, 3);
    assert_eq!(header.y(), Some(100.0));
    assert_eq!(header.confidence(), Some(1.0));
}

#[test]
fn split_headers_tie_break_to_smaller_coordinate() {
    // Two pages end their header at 100, two at 150. The deeper header sits
    // below the default zone, so only the contextual method sees both.
    let doc = Document::new(vec![
        ruled_page(150.0, 740.0),
        ruled_page(150.0, 740.0),
        ruled_page(100.0, 740.0),
        ruled_page(100.0, 740.0),
    ]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    let contextual = report.result(Edge::Header, DetectionMethod::Contextual);
    assert_eq!(contextual.total_candidates, 4);
    assert_eq!(contextual.y(), Some(100.0));
    assert_eq!(contextual.confidence(), Some(0.5));

    // The zone method only saw the pages whose head line starts above 90pt.
    let zone = report.result(Edge::Header, DetectionMethod::Zone);
    assert_eq!(zone.total_candidates, 2);
    assert_eq!(zone.y(), Some(100.0));
    assert_eq!(zone.confidence(), Some(1.0));
}

#[test]
fn best_picks_higher_confidence_method() {
    let doc = Document::new(vec![
        ruled_page(150.0, 740.0),
        ruled_page(150.0, 740.0),
        ruled_page(100.0, 740.0),
        ruled_page(100.0, 740.0),
    ]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    // Zone: 2/2 at 100.0 beats contextual's 2/4 split.
    let best = report.best(Edge::Header).unwrap();
    assert_eq!(best.method, DetectionMethod::Zone);
    assert_eq!(best.y(), Some(100.0));
}

#[test]
fn widening_header_zone_only_adds_candidates() {
    // Head lines start at 60pt: invisible to a 50pt zone, visible to 90pt.
    let doc = Document::new(vec![ruled_page(75.0, 740.0); 3]);

    let narrow_config = DetectionConfig::builder()
        .header_zone_height(50.0)
        .build()
        .unwrap();
    let narrow = BoundaryEngine::new(narrow_config).detect(&doc);
    let wide = BoundaryEngine::with_defaults().detect(&doc);

    let zone_headers = |report: &pagebound_layout::DetectionReport| {
        report
            .candidates()
            .iter()
            .filter(|c| c.edge == Edge::Header && c.method == DetectionMethod::Zone)
            .map(|c| (c.page_index, c.y.to_bits()))
            .collect::<Vec<_>>()
    };

    let narrow_set = zone_headers(&narrow);
    let wide_set = zone_headers(&wide);
    assert!(narrow_set.iter().all(|c| wide_set.contains(c)));
    assert!(narrow_set.is_empty());
    assert_eq!(wide_set.len(), 3);
}

#[test]
fn widening_zone_keeps_existing_candidates() {
    let doc = Document::new(vec![ruled_page(40.0, 740.0); 3]);

    let narrow_config = DetectionConfig::builder()
        .header_zone_height(50.0)
        .build()
        .unwrap();
    let narrow = BoundaryEngine::new(narrow_config).detect(&doc);
    let wide = BoundaryEngine::with_defaults().detect(&doc);

    // The head line (top 25pt) is inside both zones: same result either way.
    assert_eq!(
        narrow.result(Edge::Header, DetectionMethod::Zone).y(),
        Some(40.0)
    );
    assert_eq!(
        wide.result(Edge::Header, DetectionMethod::Zone).y(),
        Some(40.0)
    );
}

#[test]
fn pages_without_heights_fall_back_to_default() {
    let pages = (0..3)
        .map(|_| {
            let mut page = ruled_page(100.0, 740.0);
            page.height = None;
            page
        })
        .collect();
    let doc = Document::new(pages);

    let report = BoundaryEngine::with_defaults().detect(&doc);
    let footer = report.result(Edge::Footer, DetectionMethod::Zone);
    assert_eq!(footer.y(), Some(740.0));
    assert_eq!(footer.confidence(), Some(1.0));
}

#[test]
fn confidence_stays_in_unit_interval() {
    let doc = Document::new(vec![
        ruled_page(100.0, 740.0),
        ruled_page(150.0, 700.0),
        ruled_page(100.0, 740.0),
        body_only_page(),
    ]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    for result in report.results() {
        if let Some(confidence) = result.confidence() {
            assert!((0.0..=1.0).contains(&confidence), "confidence {confidence}");
            assert!(result.total_candidates > 0);
        } else {
            assert_eq!(result.total_candidates, 0);
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let doc = Document::new(vec![
        ruled_page(100.0, 740.0),
        ruled_page(150.0, 700.0),
        body_only_page(),
        ruled_page(100.0, 740.0),
    ]);
    let engine = BoundaryEngine::with_defaults();

    let first = engine.detect(&doc);
    let second = engine.detect(&doc);
    assert_eq!(first, second);
}

#[test]
fn results_cover_all_edge_method_pairs() {
    let doc = Document::new(vec![ruled_page(100.0, 740.0)]);
    let report = BoundaryEngine::with_defaults().detect(&doc);

    let mut seen: Vec<(Edge, DetectionMethod)> =
        report.results().iter().map(|r| (r.edge, r.method)).collect();
    seen.dedup();
    assert_eq!(seen.len(), 4);
    let _: &BoundaryResult = report.result(Edge::Footer, DetectionMethod::Contextual);
}
