pub mod angle;
pub mod intersect_3d;
pub mod orient;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Strict tolerance for degeneracy guards (zero vectors, parallel planes).
pub const TOLERANCE: f64 = 1e-10;

/// Contact tolerance for containment and distance tests, in length units.
///
/// Absorbs floating-point and CAD-export noise; the classifier and the
/// layout solver must both compare against this constant.
pub const DISTANCE_EPS: f64 = 0.01;

/// Tolerance for angle equality tests, in degrees.
pub const ANGLE_EPS_DEG: f64 = 0.01;

/// Midpoint of two points: `(a + b) / 2`.
///
/// By construction equidistant from both inputs; the shape classifier
/// relies on this invariant for its face contact probes.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::new(
        (a.x + b.x) * 0.5,
        (a.y + b.y) * 0.5,
        (a.z + b.z) * 0.5,
    )
}
