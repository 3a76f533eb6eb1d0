use hyperview_hypercube::{
    Edge, GeometryKind, Hypercube, HypercubeStats, ProjectionParams, edges, generate_vertices,
    shrink_factor,
};

#[test]
fn tesseract_at_time_zero() {
    let cube = Hypercube::new(4, ProjectionParams::default());
    let g = cube.frame(0.0);
    assert_eq!(g.kind, GeometryKind::Projected);
    assert_eq!(g.vertices.len(), 16);
    assert_eq!(g.edges.len(), 32);

    let v = generate_vertices(4);
    assert_eq!(v.vertex(0), &[-1.0, -1.0, -1.0, -1.0]);
    assert_eq!(v.vertex(15), &[1.0, 1.0, 1.0, 1.0]);

    assert!(g.edges.contains(&Edge::new(0, 1)));
    assert!(!g.edges.contains(&Edge::new(0, 3)));
}

#[test]
fn tesseract_projection_at_time_zero_is_nested_cubes() {
    // With no rotation, w = -1 gives the inner cube and w = +1 the outer one.
    let g = Hypercube::new(4, ProjectionParams::default()).frame(0.0);
    let s = shrink_factor(4) as f32;
    let inner = 0.8 * s;
    let outer = 4.0 / 3.0 * s;
    for (i, p) in g.vertices.iter().enumerate() {
        let want = if i & 0b1000 != 0 { outer } else { inner };
        assert!((p.x.abs() - want).abs() < 1e-6, "vertex {i}");
        assert!((p.y.abs() - want).abs() < 1e-6, "vertex {i}");
        assert!((p.z.abs() - want).abs() < 1e-6, "vertex {i}");
    }
}

#[test]
fn boundary_dimensions() {
    let point = Hypercube::new(0, ProjectionParams::default()).frame(5.0);
    assert_eq!(point.vertices.len(), 1);
    assert!(point.edges.is_empty());

    let cube = Hypercube::new(3, ProjectionParams::default()).frame(5.0);
    assert_eq!(cube.vertices.len(), 8);
    assert_eq!(cube.edges.len(), 12);

    assert_eq!(edges(1), vec![Edge::new(0, 1)]);
}

#[test]
fn stats_agree_with_generated_geometry() {
    for d in 0..=11 {
        let s = HypercubeStats::for_dimension(d);
        assert_eq!(s.vertices as usize, generate_vertices(d).len());
        assert_eq!(s.edges as usize, edges(d).len());
    }
}

#[test]
fn theme_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrap {
        theme: hyperview_hypercube::Theme,
    }
    let w: Wrap = toml::from_str("theme = \"light\"").unwrap();
    assert_eq!(w.theme, hyperview_hypercube::Theme::Light);
}
