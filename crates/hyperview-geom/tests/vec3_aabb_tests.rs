use hyperview_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_scalar_mul_assign_and_neg() {
    let mut v = Vec3::new(1.5, -2.0, 4.0);
    v *= 2.0;
    assert!(vec3_approx_eq(v, Vec3::new(3.0, -4.0, 8.0), 1e-6));
    assert!(vec3_approx_eq(-v, Vec3::new(-3.0, 4.0, -8.0), 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));

    // Zero vector normalization should be a no-op (not NaN, unchanged)
    let zn = Vec3::ZERO.normalized();
    assert!(vec3_approx_eq(zn, Vec3::ZERO, 1e-6));
}

#[test]
fn vec3_is_finite() {
    assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
    assert!(!Vec3::new(0.0, f32::INFINITY, 0.0).is_finite());
}

#[test]
fn aabb_from_points_covers_cube_corners() {
    let corners = [
        Vec3::new(-1.25, -1.25, -1.25),
        Vec3::new(1.25, -1.25, -1.25),
        Vec3::new(-1.25, 1.25, 1.25),
        Vec3::new(1.25, 1.25, 1.25),
    ];
    let bb = Aabb::from_points(corners).unwrap();
    assert!(vec3_approx_eq(bb.min, Vec3::new(-1.25, -1.25, -1.25), 1e-6));
    assert!(vec3_approx_eq(bb.max, Vec3::new(1.25, 1.25, 1.25), 1e-6));
    assert!(vec3_approx_eq(bb.center(), Vec3::ZERO, 1e-6));
    assert!(vec3_approx_eq(bb.extent(), Vec3::new(2.5, 2.5, 2.5), 1e-6));
    for c in corners {
        assert!(bb.contains(c));
    }
    assert!(!bb.contains(Vec3::new(1.3, 0.0, 0.0)));
}

#[test]
fn aabb_from_no_points_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}
