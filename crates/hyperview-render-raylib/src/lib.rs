//! Raylib drawing for hypercube geometry: conversions, draw lists, immediate-mode draw.
#![forbid(unsafe_code)]

pub mod scene;

pub use scene::{DrawList, LinePrim, SpherePrim, build_draw_list};

use hyperview_hypercube::{Geometry, Theme};
use raylib::prelude::*;

pub mod conv {
    use hyperview_geom::{Aabb, Vec3};
    use hyperview_hypercube::Rgba;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn aabb_to_rl(bb: Aabb) -> raylib::core::math::BoundingBox {
        raylib::core::math::BoundingBox::new(vec3_to_rl(bb.min), vec3_to_rl(bb.max))
    }

    pub fn rgba_to_rl(c: Rgba) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c.r, c.g, c.b, c.a)
    }
}

/// Sphere tessellation; low because high dimensions draw thousands of them.
const SPHERE_RINGS: i32 = 6;
const SPHERE_SLICES: i32 = 8;

/// Draws `geometry` inside an active 3D mode. Nothing is retained between calls.
pub fn draw_geometry<D>(d3: &mut D, geometry: &Geometry, theme: Theme)
where
    D: RaylibDraw3D,
{
    let list = build_draw_list(geometry, theme);
    draw_list(d3, &list);
}

pub fn draw_list<D>(d3: &mut D, list: &DrawList)
where
    D: RaylibDraw3D,
{
    for line in &list.lines {
        d3.draw_line_3D(
            conv::vec3_to_rl(line.start),
            conv::vec3_to_rl(line.end),
            conv::rgba_to_rl(line.color),
        );
    }
    for sphere in &list.spheres {
        d3.draw_sphere_ex(
            conv::vec3_to_rl(sphere.center),
            sphere.radius,
            SPHERE_RINGS,
            SPHERE_SLICES,
            conv::rgba_to_rl(sphere.color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::conv::*;
    use hyperview_geom::{Aabb, Vec3};

    #[test]
    fn vec3_conversion_round_trips() {
        let v = Vec3::new(1.5, -2.0, 0.25);
        assert_eq!(vec3_from_rl(vec3_to_rl(v)), v);
    }

    #[test]
    fn aabb_conversion_keeps_corners() {
        let bb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let rl = aabb_to_rl(bb);
        assert_eq!(vec3_from_rl(rl.min), bb.min);
        assert_eq!(vec3_from_rl(rl.max), bb.max);
    }
}
