//! Iterated perspective projection from n-D down to 3D.

use hyperview_geom::Vec3;

/// Focal distance used by the viewer.
pub const DEFAULT_FOCAL_DISTANCE: f64 = 4.0;
/// Smallest magnitude the `distance - w` denominator may take.
pub const DENOMINATOR_EPSILON: f64 = 1e-6;

const SHRINK_NUMERATOR: f64 = 1.5;
const SHRINK_FLOOR: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    NonFiniteDistance,
    /// Rotated coordinates of the largest dimension can reach `sqrt(dimension)`.
    DistanceTooShort { distance: f64, max_dimension: usize },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::NonFiniteDistance => write!(f, "focal distance must be finite"),
            ProjectionError::DistanceTooShort {
                distance,
                max_dimension,
            } => write!(
                f,
                "focal distance {} must exceed sqrt({}) so |w| < distance holds",
                distance, max_dimension
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    focal_distance: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            focal_distance: DEFAULT_FOCAL_DISTANCE,
        }
    }
}

impl ProjectionParams {
    /// Accepts `focal_distance` only if it stays above every reachable `|w|` up to
    /// `max_dimension`. A rotation preserves the vector norm, so `|w| <= sqrt(n)`.
    pub fn new(focal_distance: f64, max_dimension: usize) -> Result<Self, ProjectionError> {
        if !focal_distance.is_finite() {
            return Err(ProjectionError::NonFiniteDistance);
        }
        if focal_distance <= (max_dimension as f64).sqrt() {
            return Err(ProjectionError::DistanceTooShort {
                distance: focal_distance,
                max_dimension,
            });
        }
        Ok(Self { focal_distance })
    }

    #[inline]
    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    /// `distance / (distance - w)`, with the denominator kept at least epsilon from zero.
    #[inline]
    pub fn depth_scale(&self, w: f64) -> f64 {
        self.focal_distance / clamp_away_from_zero(self.focal_distance - w)
    }
}

#[inline]
fn clamp_away_from_zero(v: f64) -> f64 {
    if v.abs() >= DENOMINATOR_EPSILON {
        v
    } else if v.is_sign_negative() {
        -DENOMINATOR_EPSILON
    } else {
        DENOMINATOR_EPSILON
    }
}

/// `max(0.3, 1.5 / sqrt(n))`. Dimension 0 is treated as 1 so the factor stays finite.
#[inline]
pub fn shrink_factor(dimension: usize) -> f64 {
    let n = dimension.max(1) as f64;
    (SHRINK_NUMERATOR / n.sqrt()).max(SHRINK_FLOOR)
}

/// Folds every axis past the third into the first three, one perspective pass per
/// axis, then applies [`shrink_factor`].
pub fn project(rotated: &[f64], dimension: usize, params: &ProjectionParams) -> Vec3 {
    let at = |i: usize| rotated.get(i).copied().unwrap_or(0.0);
    let mut p = [at(0), at(1), at(2)];
    for &w in rotated.iter().take(dimension).skip(3) {
        let scale = params.depth_scale(w);
        for c in &mut p {
            *c *= scale;
        }
    }
    let shrink = shrink_factor(dimension);
    Vec3::new(
        (p[0] * shrink) as f32,
        (p[1] * shrink) as f32,
        (p[2] * shrink) as f32,
    )
}
