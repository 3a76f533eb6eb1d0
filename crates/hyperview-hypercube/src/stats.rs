use crate::FIRST_PROJECTED_DIMENSION;
use crate::rotate::applied_plane_count;

/// Combinatorial size of the n-cube and the per-frame work it implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HypercubeStats {
    pub dimension: usize,
    pub vertices: u64,
    pub edges: u64,
    /// `C(n, 2)`: every coordinate plane.
    pub rotation_planes: u64,
    /// Planes the engine actually turns each frame.
    pub applied_planes: usize,
}

impl HypercubeStats {
    pub fn for_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            vertices: vertex_count(dimension),
            edges: edge_count(dimension),
            rotation_planes: binomial(dimension as u64, 2),
            applied_planes: applied_plane_count(dimension),
        }
    }

    /// True for dimensions that go through rotation and projection every frame.
    #[inline]
    pub fn is_heavy(&self) -> bool {
        self.dimension >= FIRST_PROJECTED_DIMENSION
    }
}

/// `2^n`, saturating at `u64::MAX`.
pub fn vertex_count(dimension: usize) -> u64 {
    u32::try_from(dimension)
        .ok()
        .and_then(|d| 1u64.checked_shl(d))
        .unwrap_or(u64::MAX)
}

/// `n * 2^(n-1)`, saturating.
pub fn edge_count(dimension: usize) -> u64 {
    if dimension == 0 {
        return 0;
    }
    (dimension as u64).saturating_mul(vertex_count(dimension - 1))
}

/// Number of `k`-dimensional faces of the n-cube: `C(n, k) * 2^(n-k)`.
pub fn face_count(dimension: usize, k: usize) -> u64 {
    if k > dimension {
        return 0;
    }
    binomial(dimension as u64, k as u64).saturating_mul(vertex_count(dimension - k))
}

pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
