use std::sync::Arc;

use hyperview_geom::{Aabb, Vec3};

use crate::cube::{Edge, VertexSet, edges, generate_vertices};
use crate::project::{ProjectionParams, project};
use crate::rotate::rotate_vertex;
use crate::shape::FixedShape;
use crate::stats::HypercubeStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    /// Literal low-dimension shape; does not move with time.
    Fixed(FixedShape),
    /// Rotated and perspective-projected n-cube.
    Projected,
}

/// Immutable per-frame snapshot: 3D positions plus index pairs into them.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub dimension: usize,
    pub kind: GeometryKind,
    pub vertices: Vec<Vec3>,
    pub edges: Arc<[Edge]>,
}

impl Geometry {
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Endpoint positions of every edge, in edge order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.a], self.vertices[e.b]))
    }
}

/// Per-dimension cache of base vertices and edges, plus the projection settings.
///
/// Vertices and edges are rebuilt only by [`Hypercube::set_dimension`] when the value
/// actually changes; frames never mutate them.
pub struct Hypercube {
    dimension: usize,
    params: ProjectionParams,
    base: VertexSet,
    edges: Arc<[Edge]>,
}

impl Hypercube {
    pub fn new(dimension: usize, params: ProjectionParams) -> Self {
        Self {
            dimension,
            params,
            base: generate_vertices(dimension),
            edges: edges(dimension).into(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ProjectionParams) {
        self.params = params;
    }

    /// Returns `true` when the cache was rebuilt.
    pub fn set_dimension(&mut self, dimension: usize) -> bool {
        if dimension == self.dimension {
            return false;
        }
        log::debug!(
            "rebuilding hypercube cache {}D -> {}D",
            self.dimension,
            dimension
        );
        self.dimension = dimension;
        self.base = generate_vertices(dimension);
        self.edges = edges(dimension).into();
        true
    }

    #[inline]
    pub fn base_vertices(&self) -> &VertexSet {
        &self.base
    }

    #[inline]
    pub fn edges(&self) -> &Arc<[Edge]> {
        &self.edges
    }

    pub fn stats(&self) -> HypercubeStats {
        HypercubeStats::for_dimension(self.dimension)
    }

    /// Geometry for `time`: literal shapes for 0–3D, rotation and projection above.
    pub fn frame(&self, time: f64) -> Geometry {
        match FixedShape::for_dimension(self.dimension) {
            Some(shape) => Geometry {
                dimension: self.dimension,
                kind: GeometryKind::Fixed(shape),
                vertices: shape.vertices(),
                edges: Arc::clone(&self.edges),
            },
            None => self.project_generic(time),
        }
    }

    /// Rotation and projection for any dimension, including 0–3.
    pub fn project_generic(&self, time: f64) -> Geometry {
        let dimension = self.dimension;
        let mut scratch = vec![0.0f64; dimension];
        let vertices = self
            .base
            .iter()
            .map(|v| {
                scratch.copy_from_slice(v);
                rotate_vertex(&mut scratch, dimension, time);
                project(&scratch, dimension, &self.params)
            })
            .collect();
        Geometry {
            dimension,
            kind: GeometryKind::Projected,
            vertices,
            edges: Arc::clone(&self.edges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_dimensions_use_fixed_shapes() {
        let cube = Hypercube::new(3, ProjectionParams::default());
        let g = cube.frame(42.0);
        assert_eq!(g.kind, GeometryKind::Fixed(FixedShape::Cube));
        assert_eq!(g.vertices.len(), 8);
        assert_eq!(g.edges.len(), 12);
        // fixed shapes ignore time
        assert_eq!(g.vertices, cube.frame(0.0).vertices);
    }

    #[test]
    fn set_dimension_only_rebuilds_on_change() {
        let mut cube = Hypercube::new(4, ProjectionParams::default());
        let before = Arc::clone(cube.edges());
        assert!(!cube.set_dimension(4));
        assert!(Arc::ptr_eq(&before, cube.edges()));
        assert!(cube.set_dimension(5));
        assert_eq!(cube.edges().len(), 80);
        assert_eq!(cube.base_vertices().len(), 32);
    }

    #[test]
    fn frames_share_the_cached_edge_list() {
        let cube = Hypercube::new(6, ProjectionParams::default());
        let a = cube.frame(1.0);
        let b = cube.frame(2.0);
        assert!(Arc::ptr_eq(&a.edges, &b.edges));
        assert_ne!(a.vertices, b.vertices);
    }

    #[test]
    fn generic_path_at_zero_dimension() {
        let g = Hypercube::new(0, ProjectionParams::default()).project_generic(3.0);
        assert_eq!(g.vertices, vec![Vec3::ZERO]);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn segments_follow_edges() {
        let g = Hypercube::new(2, ProjectionParams::default()).frame(0.0);
        let first = g.segments().next().unwrap();
        assert_eq!(first, (g.vertices[0], g.vertices[1]));
    }
}
