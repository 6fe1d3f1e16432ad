//! Detect header/footer boundaries for a document and print the results.
//!
//! Pass a path to a JSON-serialized `Document` to analyze it, or run with no
//! arguments to analyze a small synthetic document:
//!
//! ```bash
//! cargo run --example detect_boundaries -- document.json
//! RUST_LOG=debug cargo run --example detect_boundaries
//! ```

use anyhow::{Context, Result};
use pagebound_core::{Document, Line, Page};
use pagebound_layout::{BoundaryEngine, DetectionMethod, Edge};

fn synthetic_document() -> Document {
    let pages = (0..4)
        .map(|_| {
            let mut lines = vec![Line::new(24.0, 38.0, 9.0)]; // running head
            for i in 0..20 {
                let top = 96.0 + 16.0 * f64::from(i);
                lines.push(Line::new(top, top + 11.0, 11.0));
            }
            lines.push(Line::new(756.0, 766.0, 9.0)); // page number
            Page::new(lines, Some(792.0))
        })
        .collect();
    Document::new(pages)
}

fn main() -> Result<()> {
    env_logger::init();

    let document = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("failed to parse {path}"))?
        }
        None => synthetic_document(),
    };

    let report = BoundaryEngine::with_defaults().detect(&document);

    for edge in [Edge::Header, Edge::Footer] {
        for method in [DetectionMethod::Zone, DetectionMethod::Contextual] {
            let result = report.result(edge, method);
            match result.boundary {
                Some(estimate) => println!(
                    "{edge:?}/{method:?}: y = {:.1} ({}/{} pages, confidence {:.2})",
                    estimate.y, estimate.support_count, result.total_candidates, estimate.confidence
                ),
                None => println!("{edge:?}/{method:?}: undetermined"),
            }
        }
        if let Some(best) = report.best(edge) {
            println!("{edge:?} best: {:?} at y = {:?}", best.method, best.y());
        }
    }

    println!("{}", serde_json::to_string_pretty(report.candidates())?);
    Ok(())
}
