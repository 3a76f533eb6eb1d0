//! Flattens a [`Geometry`] snapshot into coloured primitives.

use hyperview_geom::Vec3;
use hyperview_hypercube::style::{
    PROJECTED_GROUP_SCALE, edge_color, fixed_edge_color, fixed_vertex_color, fixed_vertex_radius,
    vertex_color, vertex_radius,
};
use hyperview_hypercube::{FixedShape, Geometry, GeometryKind, Rgba, Theme};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePrim {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePrim {
    pub center: Vec3,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub lines: Vec<LinePrim>,
    pub spheres: Vec<SpherePrim>,
}

pub fn build_draw_list(geometry: &Geometry, theme: Theme) -> DrawList {
    match geometry.kind {
        GeometryKind::Fixed(shape) => fixed_list(geometry, shape, theme),
        GeometryKind::Projected => projected_list(geometry, theme),
    }
}

fn projected_list(g: &Geometry, theme: Theme) -> DrawList {
    let d = g.dimension;
    let s = PROJECTED_GROUP_SCALE;
    let lines = g
        .edges
        .iter()
        .map(|e| LinePrim {
            start: g.vertices[e.a] * s,
            end: g.vertices[e.b] * s,
            color: edge_color(e.a, e.b, d, theme),
        })
        .collect();
    let radius = vertex_radius(d) * s;
    let spheres = g
        .vertices
        .iter()
        .enumerate()
        .map(|(i, &p)| SpherePrim {
            center: p * s,
            radius,
            color: vertex_color(i, d, theme),
        })
        .collect();
    DrawList { lines, spheres }
}

fn fixed_list(g: &Geometry, shape: FixedShape, theme: Theme) -> DrawList {
    let lines = g
        .edges
        .iter()
        .enumerate()
        .map(|(k, e)| LinePrim {
            start: g.vertices[e.a],
            end: g.vertices[e.b],
            color: fixed_edge_color(shape, k, theme),
        })
        .collect();
    // A bare segment reads better without end caps.
    let spheres = if shape == FixedShape::Segment {
        Vec::new()
    } else {
        g.vertices
            .iter()
            .enumerate()
            .map(|(i, &p)| SpherePrim {
                center: p,
                radius: fixed_vertex_radius(shape),
                color: fixed_vertex_color(shape, i, theme),
            })
            .collect()
    };
    DrawList { lines, spheres }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_hypercube::{Hypercube, ProjectionParams};

    fn list(d: usize, t: f64) -> DrawList {
        let g = Hypercube::new(d, ProjectionParams::default()).frame(t);
        build_draw_list(&g, Theme::Dark)
    }

    #[test]
    fn projected_list_has_one_primitive_per_element() {
        let l = list(5, 1.0);
        assert_eq!(l.lines.len(), 80);
        assert_eq!(l.spheres.len(), 32);
    }

    #[test]
    fn projected_positions_are_group_scaled() {
        let cube = Hypercube::new(4, ProjectionParams::default());
        let g = cube.frame(0.5);
        let l = build_draw_list(&g, Theme::Dark);
        assert_eq!(l.spheres[3].center, g.vertices[3] * PROJECTED_GROUP_SCALE);
    }

    #[test]
    fn segment_is_a_single_line_without_spheres() {
        let l = list(1, 0.0);
        assert_eq!(l.lines.len(), 1);
        assert!(l.spheres.is_empty());
        assert_eq!(l.lines[0].start, Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn point_is_a_single_sphere() {
        let l = list(0, 0.0);
        assert!(l.lines.is_empty());
        assert_eq!(l.spheres.len(), 1);
        assert_eq!(l.spheres[0].radius, 0.1);
    }

    #[test]
    fn theme_changes_colours_not_positions() {
        let g = Hypercube::new(6, ProjectionParams::default()).frame(2.0);
        let dark = build_draw_list(&g, Theme::Dark);
        let light = build_draw_list(&g, Theme::Light);
        assert_eq!(dark.spheres[5].center, light.spheres[5].center);
        assert_ne!(dark.spheres[5].color, light.spheres[5].color);
    }
}
