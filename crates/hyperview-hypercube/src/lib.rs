//! n-dimensional hypercube geometry: vertex generation, plane rotation, iterated
//! perspective projection to 3D, and Hamming-distance connectivity.
//!
//! The engine is pure. A host calls [`Hypercube::frame`] once per displayed frame with
//! an externally advanced time value and draws the returned [`Geometry`] snapshot.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cube;
mod engine;
pub mod project;
pub mod rotate;
pub mod shape;
pub mod stats;
pub mod style;

pub use cube::{Edge, VertexSet, edges, generate_vertices};
pub use engine::{Geometry, GeometryKind, Hypercube};
pub use project::{ProjectionError, ProjectionParams, project, shrink_factor};
pub use rotate::{RotationPlane, applied_plane_count, rotate, rotation_planes, unrotate};
pub use shape::FixedShape;
pub use stats::HypercubeStats;
pub use style::{Rgba, Theme};

/// Highest dimension the viewer offers. The math is valid above it.
pub const MAX_DIMENSION: usize = 11;

/// Lowest dimension drawn through rotation and projection; below it shapes are literal.
pub const FIRST_PROJECTED_DIMENSION: usize = 4;
