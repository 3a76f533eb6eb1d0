//! Sequential plane rotations of n-D points.
//!
//! Plane `p` turns axes `(2p mod n, 2p+1 mod n)` at `0.3 + 0.1p` radians per unit of
//! time. Planes are applied one after another to the same vector, so overlapping axis
//! sets compound.

use crate::cube::VertexSet;

/// Upper bound on the number of planes rotated per frame.
pub const MAX_ROTATION_PLANES: usize = 6;

const BASE_RATE: f64 = 0.3;
const RATE_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationPlane {
    pub index: usize,
    pub axis1: usize,
    pub axis2: usize,
}

impl RotationPlane {
    /// Angular speed in radians per unit of time.
    #[inline]
    pub fn rate(&self) -> f64 {
        BASE_RATE + RATE_STEP * self.index as f64
    }

    #[inline]
    pub fn angle(&self, time: f64) -> f64 {
        time * self.rate()
    }

    /// Rotates the `(axis1, axis2)` pair of `v` by `angle` radians.
    #[inline]
    pub fn apply(&self, v: &mut [f64], angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let x = v[self.axis1];
        let y = v[self.axis2];
        v[self.axis1] = x * cos - y * sin;
        v[self.axis2] = x * sin + y * cos;
    }
}

/// `min(6, floor(n(n-1)/4))`: half the true plane count, capped.
#[inline]
pub fn applied_plane_count(dimension: usize) -> usize {
    let pairs = dimension * dimension.saturating_sub(1);
    MAX_ROTATION_PLANES.min(pairs / 4)
}

/// Planes actually rotated for `dimension`, degenerate ones skipped.
pub fn rotation_planes(dimension: usize) -> impl Iterator<Item = RotationPlane> + Clone {
    (0..applied_plane_count(dimension)).filter_map(move |index| {
        let axis1 = (2 * index) % dimension;
        let axis2 = (2 * index + 1) % dimension;
        (axis1 != axis2 && axis1 < dimension && axis2 < dimension).then_some(RotationPlane {
            index,
            axis1,
            axis2,
        })
    })
}

/// Rotates a single vertex in place.
pub fn rotate_vertex(v: &mut [f64], dimension: usize, time: f64) {
    for plane in rotation_planes(dimension) {
        plane.apply(v, plane.angle(time));
    }
}

/// Undoes [`rotate_vertex`] for the same `time`: planes in reverse, angles negated.
pub fn unrotate_vertex(v: &mut [f64], dimension: usize, time: f64) {
    let planes: Vec<RotationPlane> = rotation_planes(dimension).collect();
    for plane in planes.iter().rev() {
        plane.apply(v, -plane.angle(time));
    }
}

/// Returns a rotated copy of `vertices`; indices and dimension are unchanged.
pub fn rotate(vertices: &VertexSet, time: f64) -> VertexSet {
    let dimension = vertices.dimension();
    let mut out = vertices.clone();
    for i in 0..out.len() {
        rotate_vertex(out.vertex_mut(i), dimension, time);
    }
    out
}

pub fn unrotate(vertices: &VertexSet, time: f64) -> VertexSet {
    let dimension = vertices.dimension();
    let mut out = vertices.clone();
    for i in 0..out.len() {
        unrotate_vertex(out.vertex_mut(i), dimension, time);
    }
    out
}
