use super::{Point3, Vector3, TOLERANCE};

/// Closest point between two lines `a(s) = origin_a + s * dir_a` and
/// `b(t) = origin_b + t * dir_b`.
///
/// For skew lines this is the midpoint of the common perpendicular; for
/// crossing lines it is the crossing itself. Returns `None` when the
/// lines are (anti-)parallel and no single closest point exists.
#[must_use]
pub fn closest_point_between_lines(
    origin_a: &Point3,
    dir_a: &Vector3,
    origin_b: &Point3,
    dir_b: &Vector3,
) -> Option<Point3> {
    let d = origin_b - origin_a;
    let aa = dir_a.dot(dir_a);
    let bb = dir_b.dot(dir_b);
    let ab = dir_a.dot(dir_b);

    let denom = aa * bb - ab * ab;
    if denom.abs() < TOLERANCE {
        return None;
    }

    let da = d.dot(dir_a);
    let db = d.dot(dir_b);
    let s = (da * bb - db * ab) / denom;
    let t = (da * ab - db * aa) / denom;

    let on_a = origin_a + dir_a * s;
    let on_b = origin_b + dir_b * t;
    Some(super::midpoint(&on_a, &on_b))
}

/// Intersection of the line `origin + t * dir` with the plane through
/// `plane_point` with normal `plane_normal`.
///
/// Returns `None` when the line is parallel to the plane.
#[must_use]
pub fn line_plane_point(
    origin: &Point3,
    dir: &Vector3,
    plane_point: &Point3,
    plane_normal: &Vector3,
) -> Option<Point3> {
    let denom = plane_normal.dot(dir);
    if denom.abs() < TOLERANCE {
        return None;
    }
    let t = plane_normal.dot(&(plane_point - origin)) / denom;
    Some(origin + dir * t)
}

/// Intersection of two offset axis lines in plan view.
///
/// Solves for the point `P` at the height of `anchor` with
/// `(P - anchor) . normal_a == offset_a` and
/// `(P - anchor) . normal_b == offset_b`, where the normals are the
/// horizontal side-offset directions of two wall axes. Returns `None`
/// when the axes are parallel in plan.
#[must_use]
pub fn offset_axes_intersection(
    anchor: &Point3,
    normal_a: &Vector3,
    offset_a: f64,
    normal_b: &Vector3,
    offset_b: f64,
) -> Option<Point3> {
    let det = normal_a.x * normal_b.y - normal_a.y * normal_b.x;
    if det.abs() < TOLERANCE {
        return None;
    }
    let dx = (offset_a * normal_b.y - offset_b * normal_a.y) / det;
    let dy = (offset_b * normal_a.x - offset_a * normal_b.x) / det;
    Some(Point3::new(anchor.x + dx, anchor.y + dy, anchor.z))
}
