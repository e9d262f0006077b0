use crate::error::{GeometryError, Result};
use crate::math::{midpoint, Point3, Vector3, DISTANCE_EPS, TOLERANCE};

use super::segment::Segment;

/// An oriented planar quadrilateral, the boundary element of a wall prism.
///
/// The four corner points are ordered so that consecutive points form
/// boundary edges (never diagonals). The normal fixes the face
/// orientation independently of the corner winding. All derived data
/// (edges, center, diagonal, bottom edge, extreme corners) is computed
/// at construction; faces are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedFace {
    points: [Point3; 4],
    normal: Vector3,
    edges: [Segment; 4],
    center: Point3,
    diagonal: Segment,
    bottom_edge: usize,
    min_point: Point3,
    max_point: Point3,
}

impl OrientedFace {
    /// Builds a face from four ordered corners and its plane normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length, the corners leave
    /// the plane by more than the contact tolerance, two corners
    /// coincide, or the corners are not in boundary order (a diagonal
    /// listed as an edge produces a self-intersecting quad).
    pub fn new(points: [Point3; 4], normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        let anchor = points[0];
        for pt in &points[1..] {
            let deviation = (pt - anchor).dot(&normal).abs();
            if deviation > DISTANCE_EPS {
                return Err(GeometryError::NonCoplanarFace { deviation }.into());
            }
        }

        // Consecutive edge cross products must agree in sign along the
        // normal, otherwise the corner order describes a bowtie.
        let mut reference_sign = 0.0_f64;
        for i in 0..4 {
            let prev = points[i];
            let here = points[(i + 1) % 4];
            let next = points[(i + 2) % 4];
            let cross = (here - prev).cross(&(next - here)).dot(&normal);
            if cross.abs() < TOLERANCE {
                continue;
            }
            if reference_sign == 0.0 {
                reference_sign = cross.signum();
            } else if cross.signum() != reference_sign {
                return Err(GeometryError::UnorderedFaceCorners.into());
            }
        }
        if reference_sign == 0.0 {
            return Err(GeometryError::Degenerate("face has no area".into()).into());
        }

        let edges = [
            Segment::new(points[0], points[1])?,
            Segment::new(points[1], points[2])?,
            Segment::new(points[2], points[3])?,
            Segment::new(points[3], points[0])?,
        ];

        let center = Point3::from(
            (points[0].coords + points[1].coords + points[2].coords + points[3].coords) / 4.0,
        );
        let diagonal = Segment::new(points[0], points[2])?;

        let bottom_edge = Self::lowest_edge(&edges);
        let min_point = Self::extreme_corner(&points, false);
        let max_point = Self::extreme_corner(&points, true);

        Ok(Self {
            points,
            normal,
            edges,
            center,
            diagonal,
            bottom_edge,
            min_point,
            max_point,
        })
    }

    fn lowest_edge(edges: &[Segment; 4]) -> usize {
        let mut best = 0;
        for (i, edge) in edges.iter().enumerate().skip(1) {
            if edge.center().z < edges[best].center().z - TOLERANCE {
                best = i;
            }
        }
        best
    }

    /// Extreme corner by (z, y, x) lexicographic comparison, so the
    /// result is always one of the actual corners.
    fn extreme_corner(points: &[Point3; 4], maximum: bool) -> Point3 {
        let mut best = points[0];
        for &pt in &points[1..] {
            let key = (pt.z, pt.y, pt.x);
            let best_key = (best.z, best.y, best.x);
            let better = if maximum { key > best_key } else { key < best_key };
            if better {
                best = pt;
            }
        }
        best
    }

    /// Returns the four ordered corner points.
    #[must_use]
    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    /// Returns the unit face normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the four boundary edges.
    #[must_use]
    pub fn edges(&self) -> &[Segment; 4] {
        &self.edges
    }

    /// Returns the face center (corner average).
    #[must_use]
    pub fn center_point(&self) -> &Point3 {
        &self.center
    }

    /// Returns the corner-to-opposite-corner diagonal.
    #[must_use]
    pub fn diagonal(&self) -> &Segment {
        &self.diagonal
    }

    /// Returns the lowest boundary edge (by edge midpoint height).
    #[must_use]
    pub fn bottom_edge(&self) -> &Segment {
        &self.edges[self.bottom_edge]
    }

    /// Returns the minimum corner (lexicographic by z, then y, then x).
    #[must_use]
    pub fn min_point(&self) -> &Point3 {
        &self.min_point
    }

    /// Returns the maximum corner (lexicographic by z, then y, then x).
    #[must_use]
    pub fn max_point(&self) -> &Point3 {
        &self.max_point
    }

    /// Unsigned distance from a point to the face plane.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point3) -> f64 {
        (point - self.center).dot(&self.normal).abs()
    }

    /// Projects a point onto the face plane along the normal.
    #[must_use]
    pub fn project_onto_plane(&self, point: &Point3) -> Point3 {
        point - self.normal * (point - self.center).dot(&self.normal)
    }

    /// Contact test: the point lies on the face plane and its projection
    /// falls inside the rectangular bounds, both within the contact
    /// tolerance. Used by the shape classifier's touch probes.
    #[must_use]
    pub fn touches_point(&self, point: &Point3) -> bool {
        if self.distance_to_point(point) > DISTANCE_EPS {
            return false;
        }
        let projected = self.project_onto_plane(point);
        self.contains_projected(&projected)
    }

    /// Rectangular bounds test for a point already on the face plane.
    fn contains_projected(&self, point: &Point3) -> bool {
        let u_axis = self.edges[0].direction();
        let v_axis = self.normal.cross(&u_axis);

        let rel = point - self.points[0];
        let u = rel.dot(&u_axis);
        let v = rel.dot(&v_axis);

        let u_extent = (self.points[1] - self.points[0]).dot(&u_axis);
        let v_extent = (self.points[3] - self.points[0]).dot(&v_axis);

        let (u_min, u_max) = bounds(0.0, u_extent);
        let (v_min, v_max) = bounds(0.0, v_extent);
        u >= u_min - DISTANCE_EPS
            && u <= u_max + DISTANCE_EPS
            && v >= v_min - DISTANCE_EPS
            && v <= v_max + DISTANCE_EPS
    }
}

fn bounds(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Midpoint of two face centers — the classifier's contact probe point.
///
/// Always equidistant from both centers (`(center_a + center_b) / 2`).
#[must_use]
pub fn face_pair_midpoint(a: &OrientedFace, b: &OrientedFace) -> Point3 {
    midpoint(a.center_point(), b.center_point())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    /// Vertical face in the X = 0 plane, 4 long and 2.5 high.
    fn yz_face() -> OrientedFace {
        OrientedFace::new(
            [
                p(0.0, 0.0, 0.0),
                p(0.0, 4000.0, 0.0),
                p(0.0, 4000.0, 2500.0),
                p(0.0, 0.0, 2500.0),
            ],
            v(1.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn derived_data() {
        let face = yz_face();
        assert_eq!(*face.center_point(), p(0.0, 2000.0, 1250.0));
        assert_eq!(face.diagonal().center(), *face.center_point());
        assert_eq!(*face.bottom_edge(), face.edges()[0].clone());
        assert!(face.points().contains(face.min_point()));
        assert!(face.points().contains(face.max_point()));
        assert_eq!(*face.min_point(), p(0.0, 0.0, 0.0));
        assert_eq!(*face.max_point(), p(0.0, 4000.0, 2500.0));
    }

    #[test]
    fn distance_is_plane_offset() {
        let face = yz_face();
        assert!((face.distance_to_point(&p(137.5, 200.0, 100.0)) - 137.5).abs() < TOLERANCE);
        assert!((face.distance_to_point(&p(-42.0, 9999.0, -50.0)) - 42.0).abs() < TOLERANCE);
        assert!(face.distance_to_point(&p(0.0, 123.0, 456.0)) < TOLERANCE);
    }

    #[test]
    fn touch_inside_and_outside() {
        let face = yz_face();
        assert!(face.touches_point(&p(0.0, 2000.0, 1250.0)));
        assert!(face.touches_point(&p(0.005, 0.0, 0.0)), "eps-near corner");
        assert!(!face.touches_point(&p(0.0, 4500.0, 1250.0)), "beyond bounds");
        assert!(!face.touches_point(&p(5.0, 2000.0, 1250.0)), "off plane");
        assert!(!face.touches_point(&p(0.0, 2000.0, -800.0)), "below bounds");
    }

    #[test]
    fn zero_normal_rejected() {
        let err = OrientedFace::new(
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
            v(0.0, 0.0, 0.0),
        );
        assert!(err.is_err());
    }

    #[test]
    fn non_coplanar_rejected() {
        let err = OrientedFace::new(
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.5), p(0.0, 1.0, 0.0)],
            v(0.0, 0.0, 1.0),
        );
        assert!(err.is_err());
    }

    #[test]
    fn bowtie_order_rejected() {
        // p1 and p2 swapped: consecutive points now span a diagonal.
        let err = OrientedFace::new(
            [p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            v(0.0, 0.0, 1.0),
        );
        assert!(err.is_err());
    }

    #[test]
    fn pair_midpoint_is_equidistant() {
        let a = yz_face();
        let b = OrientedFace::new(
            [
                p(300.0, 0.0, 0.0),
                p(300.0, 4000.0, 0.0),
                p(300.0, 4000.0, 2500.0),
                p(300.0, 0.0, 2500.0),
            ],
            v(-1.0, 0.0, 0.0),
        )
        .unwrap();
        let mid = face_pair_midpoint(&a, &b);
        let da = (mid - a.center_point()).norm();
        let db = (mid - b.center_point()).norm();
        assert!((da - db).abs() < TOLERANCE);
    }
}
