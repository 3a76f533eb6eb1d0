//! Literal shapes for dimensions 0 through 3. They already sit in 3-space, so they skip
//! rotation and projection. Vertex order matches the bit-pattern order of
//! [`generate_vertices`](crate::cube::generate_vertices), so [`edges`](crate::cube::edges)
//! applies unchanged.

use hyperview_geom::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedShape {
    Point,
    Segment,
    Square,
    Cube,
}

impl FixedShape {
    pub fn for_dimension(dimension: usize) -> Option<Self> {
        match dimension {
            0 => Some(Self::Point),
            1 => Some(Self::Segment),
            2 => Some(Self::Square),
            3 => Some(Self::Cube),
            _ => None,
        }
    }

    pub fn dimension(self) -> usize {
        match self {
            Self::Point => 0,
            Self::Segment => 1,
            Self::Square => 2,
            Self::Cube => 3,
        }
    }

    /// Distance from the centre to a vertex along each used axis.
    pub fn half_extent(self) -> f32 {
        match self {
            Self::Point => 0.0,
            Self::Segment => 2.0,
            Self::Square => 1.5,
            Self::Cube => 1.25,
        }
    }

    // The segment stands upright; the square lies in the XY plane.
    fn axis(self, bit: usize) -> Vec3 {
        match (self, bit) {
            (Self::Segment, 0) => Vec3::UP,
            (_, 0) => Vec3::new(1.0, 0.0, 0.0),
            (_, 1) => Vec3::new(0.0, 1.0, 0.0),
            _ => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn vertices(self) -> Vec<Vec3> {
        let dimension = self.dimension();
        let h = self.half_extent();
        (0..1usize << dimension)
            .map(|i| {
                (0..dimension).fold(Vec3::ZERO, |acc, bit| {
                    let sign = if i & (1 << bit) != 0 { h } else { -h };
                    acc + self.axis(bit) * sign
                })
            })
            .collect()
    }
}
