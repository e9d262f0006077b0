pub mod cx;
pub mod lv;
pub mod member;
pub mod recognizer;
pub mod ty;

pub use cx::{CShape, XShape};
pub use lv::{LShape, VShape};
pub use member::{ProfileFaceId, ShapeMember, SideFaceId};
pub use recognizer::recognize;
pub use ty::{TShape, YShape};

use crate::math::Point3;

/// The topological class of a wall junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    L,
    V,
    T,
    Y,
    C,
    X,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::L => "LShape",
            Self::V => "VShape",
            Self::T => "TShape",
            Self::Y => "YShape",
            Self::C => "CShape",
            Self::X => "XShape",
        };
        f.write_str(name)
    }
}

/// A classified wall junction.
///
/// Closed set of variants; walls that do not touch produce no `Shape`
/// at all (`recognize` returns `None`). Shapes are terminal — a new
/// wall pair needs a fresh classification run.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    L(LShape),
    V(VShape),
    T(TShape),
    Y(YShape),
    C(CShape),
    X(XShape),
}

impl Shape {
    /// Returns the junction class.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::L(_) => ShapeKind::L,
            Self::V(_) => ShapeKind::V,
            Self::T(_) => ShapeKind::T,
            Self::Y(_) => ShapeKind::Y,
            Self::C(_) => ShapeKind::C,
            Self::X(_) => ShapeKind::X,
        }
    }

    /// Returns the host member.
    #[must_use]
    pub fn host(&self) -> &ShapeMember {
        match self {
            Self::L(s) => s.host_wall(),
            Self::V(s) => s.host_wall(),
            Self::T(s) => s.host_wall(),
            Self::Y(s) => s.host_wall(),
            Self::C(s) => s.host_wall(),
            Self::X(s) => s.host_wall(),
        }
    }

    /// Returns the guest member.
    #[must_use]
    pub fn guest(&self) -> &ShapeMember {
        match self {
            Self::L(s) => s.guest_wall(),
            Self::V(s) => s.guest_wall(),
            Self::T(s) => s.guest_wall(),
            Self::Y(s) => s.guest_wall(),
            Self::C(s) => s.guest_wall(),
            Self::X(s) => s.guest_wall(),
        }
    }

    /// Returns the junction (or crossing) point.
    #[must_use]
    pub fn junction_point(&self) -> &Point3 {
        match self {
            Self::L(s) => s.junction_point(),
            Self::V(s) => s.junction_point(),
            Self::T(s) => s.junction_point(),
            Self::Y(s) => s.junction_point(),
            Self::C(s) => s.intersection_point(),
            Self::X(s) => s.intersection_point(),
        }
    }

    /// The junction angle(s) in degrees: corner shapes carry one, tee
    /// and crossing shapes a `(small, big)` pair.
    #[must_use]
    pub fn angles(&self) -> (f64, Option<f64>) {
        match self {
            Self::L(s) => (s.angle(), None),
            Self::V(s) => (s.angle(), None),
            Self::T(s) => pair(s.angles()),
            Self::Y(s) => pair(s.angles()),
            Self::C(s) => pair(s.angles()),
            Self::X(s) => pair(s.angles()),
        }
    }

    /// Landmark point(s) on the concave side of the junction.
    #[must_use]
    pub fn interior_points(&self) -> &[Point3] {
        match self {
            Self::L(s) => std::slice::from_ref(s.interior_point()),
            Self::V(s) => std::slice::from_ref(s.interior_point()),
            Self::T(s) => s.interior_points(),
            Self::Y(s) => s.interior_points(),
            Self::C(s) => s.interior_points(),
            Self::X(s) => s.interior_points(),
        }
    }

    /// Landmark point(s) on the convex side of the junction.
    #[must_use]
    pub fn exterior_points(&self) -> &[Point3] {
        match self {
            Self::L(s) => std::slice::from_ref(s.exterior_point()),
            Self::V(s) => std::slice::from_ref(s.exterior_point()),
            Self::T(s) => s.exterior_points(),
            Self::Y(s) => s.exterior_points(),
            Self::C(s) => s.exterior_points(),
            Self::X(s) => s.exterior_points(),
        }
    }
}

fn pair(angles: (f64, f64)) -> (f64, Option<f64>) {
    (angles.0, Some(angles.1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, ANGLE_EPS_DEG, DISTANCE_EPS};
    use crate::wall::Wall;

    const WIDTH: f64 = 240.0;
    const HEIGHT: f64 = 2500.0;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn wall(start: Point3, end: Point3) -> Wall {
        Wall::from_axis(start, end, WIDTH, HEIGHT).unwrap()
    }

    /// Square corner: both walls end at the shared corner point.
    fn l_pair() -> (Wall, Wall) {
        (
            wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0)),
            wall(p(0.0, 0.0, 0.0), p(0.0, 4000.0, 0.0)),
        )
    }

    /// Tee: the first wall terminates on the second wall's flank.
    fn t_pair() -> (Wall, Wall) {
        (
            wall(p(120.0, 0.0, 0.0), p(5000.0, 0.0, 0.0)),
            wall(p(0.0, -2500.0, 0.0), p(0.0, 2500.0, 0.0)),
        )
    }

    #[test]
    fn unrelated_walls_yield_none() {
        let a = wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(p(0.0, 3000.0, 0.0), p(5000.0, 3000.0, 0.0));
        assert!(recognize(&a, &b).is_none());
    }

    #[test]
    fn stacked_walls_are_not_classified() {
        // The guest rests on top of the host: the faces touch but there
        // is no junction to classify.
        let a = wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(p(500.0, 0.0, HEIGHT), p(4500.0, 0.0, HEIGHT));
        assert!(recognize(&a, &b).is_none());
    }

    #[test]
    fn square_corner_is_l() {
        let (a, b) = l_pair();
        let shape = recognize(&a, &b).unwrap();
        assert_eq!(shape.kind(), ShapeKind::L);

        let Shape::L(l) = &shape else { panic!("expected LShape") };
        assert!((l.angle() - 90.0).abs() <= ANGLE_EPS_DEG);
        assert_eq!(*l.junction_point(), p(0.0, 0.0, 0.0));

        // The interior landmark sits on the host's interior profile plane.
        let host = l.host_wall();
        assert!(host.interior_face().distance_to_point(l.interior_point()) < DISTANCE_EPS);
        assert!(host.exterior_face().distance_to_point(l.exterior_point()) < DISTANCE_EPS);
    }

    #[test]
    fn oblique_corner_is_v() {
        let open = 120.0_f64.to_radians();
        let a = wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(
            p(0.0, 0.0, 0.0),
            p(4000.0 * open.cos(), 4000.0 * open.sin(), 0.0),
        );
        let shape = recognize(&a, &b).unwrap();
        let Shape::V(v) = &shape else { panic!("expected VShape, got {:?}", shape.kind()) };

        assert!((v.angle() - 120.0).abs() < 1e-6, "angle = {}", v.angle());
        let host = v.host_wall();
        assert!(host.interior_face().distance_to_point(v.interior_point()) < DISTANCE_EPS);
        assert!(host.exterior_face().distance_to_point(v.exterior_point()) < DISTANCE_EPS);
    }

    #[test]
    fn v_angles_complement_to_180() {
        let open = 60.0_f64.to_radians();
        let a = wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(
            p(0.0, 0.0, 0.0),
            p(4000.0 * open.cos(), 4000.0 * open.sin(), 0.0),
        );
        let Shape::V(v) = recognize(&a, &b).unwrap() else { panic!("expected VShape") };
        assert!((v.angle() - 60.0).abs() < 1e-6);

        let (small, big) = crate::math::angle::axis_angle_pair_deg(
            a.orientation(),
            b.orientation(),
        )
        .unwrap();
        assert!(small < big, "oblique corner angles must differ");
        assert!((small + big - 180.0).abs() < 1e-9);
    }

    #[test]
    fn terminating_wall_makes_a_t() {
        let (a, b) = t_pair();
        let shape = recognize(&a, &b).unwrap();
        let Shape::T(t) = &shape else { panic!("expected TShape, got {:?}", shape.kind()) };

        let (angle_1, angle_2) = t.angles();
        assert!((angle_1 - 90.0).abs() <= ANGLE_EPS_DEG);
        assert!((angle_2 - 90.0).abs() <= ANGLE_EPS_DEG);
        assert_eq!(*t.junction_point(), p(120.0, 0.0, 0.0));

        // Both junction corners lie on the terminating wall's end plane.
        let host = t.host_wall();
        for corner in t.interior_points() {
            assert!(host.interior_face().distance_to_point(corner) < DISTANCE_EPS);
        }
        // The host is the terminating wall regardless of argument order.
        assert_eq!(host.wall(), &a);
        assert_eq!(t.guest_wall().wall(), &b);
    }

    #[test]
    fn t_host_follows_terminating_wall_in_either_argument_order() {
        let (a, b) = t_pair();
        let Shape::T(t) = recognize(&b, &a).unwrap() else { panic!("expected TShape") };
        assert_eq!(t.host_wall().wall(), &a);
    }

    #[test]
    fn oblique_termination_is_y() {
        let slant = 30.0_f64.to_radians();
        let host = wall(
            p(120.0, 0.0, 0.0),
            p(120.0 + 4000.0 * slant.cos(), 4000.0 * slant.sin(), 0.0),
        );
        let guest = wall(p(0.0, -2500.0, 0.0), p(0.0, 2500.0, 0.0));
        let shape = recognize(&host, &guest).unwrap();
        let Shape::Y(y) = &shape else { panic!("expected YShape, got {:?}", shape.kind()) };

        let (angle_1, angle_2) = y.angles();
        assert!(angle_1 <= angle_2);
        assert!((angle_1 + angle_2 - 180.0).abs() < 1e-9);
        assert!((angle_1 - 30.0).abs() < 1e-6, "angle_1 = {angle_1}");

        let member = y.host_wall();
        for corner in y.interior_points() {
            assert!(member.interior_face().distance_to_point(corner) < DISTANCE_EPS);
        }
    }

    #[test]
    fn perpendicular_crossing_is_c() {
        let a = wall(p(-5000.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(p(0.0, -3000.0, 0.0), p(0.0, 3000.0, 0.0));
        let shape = recognize(&a, &b).unwrap();
        let Shape::C(c) = &shape else { panic!("expected CShape, got {:?}", shape.kind()) };

        let (angle_1, angle_2) = c.angles();
        assert!((angle_1 - 90.0).abs() <= ANGLE_EPS_DEG);
        assert!((angle_2 - 90.0).abs() <= ANGLE_EPS_DEG);
        assert_eq!(*c.intersection_point(), p(0.0, 0.0, 0.0));

        // The crossing corners are the four overlap-region corners.
        for corner in c.interior_points().iter().chain(c.exterior_points()) {
            assert!((corner.x.abs() - WIDTH / 2.0).abs() < DISTANCE_EPS);
            assert!((corner.y.abs() - WIDTH / 2.0).abs() < DISTANCE_EPS);
        }
    }

    #[test]
    fn oblique_crossing_is_x() {
        let slant = 60.0_f64.to_radians();
        let a = wall(p(-5000.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(
            p(-2000.0 * slant.cos(), -2000.0 * slant.sin(), 0.0),
            p(2000.0 * slant.cos(), 2000.0 * slant.sin(), 0.0),
        );
        let shape = recognize(&a, &b).unwrap();
        let Shape::X(x) = &shape else { panic!("expected XShape, got {:?}", shape.kind()) };

        let (angle_1, angle_2) = x.angles();
        assert!(angle_1 <= angle_2);
        assert!((angle_1 - 60.0).abs() < 1e-6);
        assert!((angle_1 + angle_2 - 180.0).abs() < 1e-9);
    }

    #[test]
    fn classification_is_idempotent() {
        let (a, b) = l_pair();
        let first = recognize(&a, &b).unwrap();
        let second = recognize(&a, &b).unwrap();
        assert_eq!(first, second);

        let (a, b) = t_pair();
        let first = recognize(&a, &b).unwrap();
        let second = recognize(&a, &b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn member_roles_select_wall_faces() {
        let (a, b) = l_pair();
        let shape = recognize(&a, &b).unwrap();
        for member in [shape.host(), shape.guest()] {
            let wall = member.wall();
            let sides = [wall.first_face(), wall.second_face()];
            let profiles = [wall.third_face(), wall.fourth_face()];
            assert!(sides.contains(&member.closeside_face()));
            assert!(sides.contains(&member.farside_face()));
            assert!(profiles.contains(&member.interior_face()));
            assert!(profiles.contains(&member.exterior_face()));
            assert_ne!(member.closeside_face(), member.farside_face());
            assert_ne!(member.interior_face(), member.exterior_face());
        }
    }

    #[test]
    fn shape_accessors_expose_landmarks() {
        let (a, b) = t_pair();
        let shape = recognize(&a, &b).unwrap();
        assert_eq!(shape.interior_points().len(), 2);
        assert_eq!(shape.exterior_points().len(), 2);
        let (small, big) = shape.angles();
        assert!((small - 90.0).abs() <= ANGLE_EPS_DEG);
        assert_eq!(big, Some(90.0));

        let (a, b) = l_pair();
        let shape = recognize(&a, &b).unwrap();
        assert_eq!(shape.interior_points().len(), 1);
        assert_eq!(shape.angles(), (90.0, None));
        assert_eq!(shape.kind().to_string(), "LShape");
    }

    #[test]
    fn touch_probes_are_equidistant_from_both_centers() {
        use crate::geometry::face_pair_midpoint;
        let (a, b) = t_pair();
        for (face_a, _) in a.categorized_faces() {
            for (face_b, _) in b.categorized_faces() {
                let mid = face_pair_midpoint(face_a, face_b);
                let da = (mid - face_a.center_point()).norm();
                let db = (mid - face_b.center_point()).norm();
                assert!((da - db).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn collinear_extension_falls_back_to_contact_midpoint() {
        // Two collinear walls butting end to end: the axes are parallel,
        // so the junction comes from the contact probe itself.
        let a = wall(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0));
        let b = wall(p(5000.0, 0.0, 0.0), p(9000.0, 0.0, 0.0));
        let shape = recognize(&a, &b).unwrap();
        let Shape::V(v) = &shape else { panic!("expected VShape, got {:?}", shape.kind()) };
        assert_eq!(*v.junction_point(), p(5000.0, 0.0, HEIGHT / 2.0));
    }
}
