use std::fmt::Write as _;

use hyperview_hypercube::catalog;
use hyperview_hypercube::{Geometry, GeometryKind, HypercubeStats, MAX_DIMENSION};

/// One line per dimension the viewer offers.
pub fn stats_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:>6} {:>7} {:>7} {:>7}",
        "dim", "name", "verts", "edges", "planes", "applied"
    );
    for d in 0..=MAX_DIMENSION {
        let s = HypercubeStats::for_dimension(d);
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:>6} {:>7} {:>7} {:>7}",
            catalog::label(d),
            catalog::name(d),
            s.vertices,
            s.edges,
            s.rotation_planes,
            s.applied_planes
        );
    }
    out
}

/// Catalog entry for `dimension` as plain text.
pub fn catalog_entry(dimension: usize) -> String {
    let info = catalog::info(dimension);
    let stats = HypercubeStats::for_dimension(dimension);
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", info.label, info.name);
    let _ = writeln!(out, "{}", info.description);
    for (title, lines) in [
        ("Properties", &info.properties),
        ("Geometric", &info.geometric),
        ("Topological", &info.topological),
    ] {
        let _ = writeln!(out, "{}:", title);
        for line in lines {
            let _ = writeln!(out, "  - {}", line);
        }
    }
    if stats.is_heavy() {
        let _ = writeln!(
            out,
            "Performance warning: {} vertices and {} edges per frame",
            stats.vertices, stats.edges
        );
    }
    out
}

/// Summary of a single frame: kind, counts and bounds.
pub fn frame_summary(geometry: &Geometry, time: f64) -> String {
    let mut out = String::new();
    let kind = match geometry.kind {
        GeometryKind::Fixed(shape) => format!("fixed {:?}", shape),
        GeometryKind::Projected => "projected".to_string(),
    };
    let _ = writeln!(
        out,
        "{}D frame at t={:.3}: {} ({} vertices, {} edges)",
        geometry.dimension,
        time,
        kind,
        geometry.vertices.len(),
        geometry.edges.len()
    );
    if let Some(b) = geometry.bounds() {
        let _ = writeln!(
            out,
            "bounds min=({:.3}, {:.3}, {:.3}) max=({:.3}, {:.3}, {:.3})",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_hypercube::{Hypercube, ProjectionParams};

    #[test]
    fn table_lists_every_dimension() {
        let t = stats_table();
        assert_eq!(t.lines().count(), MAX_DIMENSION + 2);
        let tesseract = t.lines().find(|l| l.trim_start().starts_with("4D")).unwrap();
        assert!(tesseract.contains("Tesseract"));
        assert!(tesseract.contains(" 16 "));
        assert!(tesseract.contains(" 32 "));
    }

    #[test]
    fn summary_reports_counts() {
        let g = Hypercube::new(4, ProjectionParams::default()).frame(0.0);
        let s = frame_summary(&g, 0.0);
        assert!(s.starts_with("4D frame at t=0.000: projected (16 vertices, 32 edges)"));
        assert!(s.contains("bounds min="));
    }

    #[test]
    fn catalog_entry_has_sections_and_warning() {
        let e = catalog_entry(5);
        assert!(e.starts_with("5D Penteract (5-cube)\n"));
        assert!(e.contains("Topological:\n"));
        assert!(e.contains("Performance warning: 32 vertices and 80 edges"));
        assert!(!catalog_entry(3).contains("Performance warning"));
    }

    #[test]
    fn point_has_no_edges() {
        let g = Hypercube::new(0, ProjectionParams::default()).frame(0.0);
        assert!(frame_summary(&g, 0.0).contains("(1 vertices, 0 edges)"));
    }
}
