use tracing::{debug, warn};

use crate::geometry::face_pair_midpoint;
use crate::math::angle::axis_angle_pair_deg;
use crate::math::intersect_3d::closest_point_between_lines;
use crate::math::{Point3, ANGLE_EPS_DEG, DISTANCE_EPS};
use crate::wall::{FaceCategory, Wall};

use super::cx::{CShape, XShape};
use super::lv::{LShape, VShape};
use super::ty::{TShape, YShape};
use super::Shape;

/// One touching face pair found by the contact probes.
#[derive(Debug, Clone, Copy)]
struct Contact {
    face_a: usize,
    face_b: usize,
    category_a: FaceCategory,
    category_b: FaceCategory,
    midpoint: Point3,
}

/// Classifies the junction between two walls.
///
/// Returns `None` when the walls do not touch, and also for touching
/// patterns the classifier does not recognize (those are logged rather
/// than guessed at). For L, V, C and X results the host member is
/// `wall_a`; for T and Y it is the terminating wall, whichever argument
/// that is.
#[must_use]
pub fn recognize(wall_a: &Wall, wall_b: &Wall) -> Option<Shape> {
    let contacts = collect_contacts(wall_a, wall_b);
    if contacts.is_empty() {
        debug!("no touching face pairs, walls are unrelated");
        return None;
    }

    let Some(angle_pair) = axis_angle_pair_deg(wall_a.orientation(), wall_b.orientation()) else {
        warn!("degenerate wall orientation, cannot classify junction");
        return None;
    };
    let square = (angle_pair.0 - 90.0).abs() <= ANGLE_EPS_DEG;
    debug!(
        contacts = contacts.len(),
        small_angle = angle_pair.0,
        big_angle = angle_pair.1,
        "classifying junction"
    );

    if let Some(contact) = find_pair(&contacts, FaceCategory::Profile, FaceCategory::Profile) {
        let junction = axes_crossing(wall_a, wall_b).unwrap_or(contact.midpoint);
        if square {
            return Some(Shape::L(LShape::build(wall_a, wall_b, junction)));
        }
        return build_or_warn(VShape::build(wall_a, wall_b, junction).map(Shape::V));
    }

    if let Some((host, guest, flank)) = tee_arrangement(wall_a, wall_b, &contacts) {
        if square {
            return build_or_warn(TShape::build(host, guest, flank).map(Shape::T));
        }
        return build_or_warn(YShape::build(host, guest, flank, angle_pair).map(Shape::Y));
    }

    // Remaining patterns (top/bottom or side-to-side contact) can only
    // be a crossing of the two walls through each other.
    if let Some(junction) = plan_crossing(wall_a, wall_b) {
        if square {
            return build_or_warn(CShape::build(wall_a, wall_b, junction).map(Shape::C));
        }
        return build_or_warn(XShape::build(wall_a, wall_b, junction, angle_pair).map(Shape::X));
    }

    warn!(
        contacts = contacts.len(),
        "touching pattern matches no junction class"
    );
    None
}

fn build_or_warn(shape: Option<Shape>) -> Option<Shape> {
    if shape.is_none() {
        warn!("junction landmarks are degenerate, not classifying");
    }
    shape
}

/// Probes all face pairs of the two walls with the center midpoint test.
///
/// The probe point is the midpoint of the two face centers; the test is
/// deliberately bidirectional so a contact registers even when
/// floating-point noise keeps it off one of the two faces.
fn collect_contacts(wall_a: &Wall, wall_b: &Wall) -> Vec<Contact> {
    let faces_a = wall_a.categorized_faces();
    let faces_b = wall_b.categorized_faces();

    let mut contacts = Vec::new();
    for (i, (face_a, category_a)) in faces_a.iter().enumerate() {
        for (j, (face_b, category_b)) in faces_b.iter().enumerate() {
            let midpoint = face_pair_midpoint(face_a, face_b);
            if face_a.touches_point(&midpoint) || face_b.touches_point(&midpoint) {
                contacts.push(Contact {
                    face_a: i,
                    face_b: j,
                    category_a: *category_a,
                    category_b: *category_b,
                    midpoint,
                });
            }
        }
    }
    contacts
}

fn find_pair(contacts: &[Contact], a: FaceCategory, b: FaceCategory) -> Option<Contact> {
    contacts
        .iter()
        .find(|c| c.category_a == a && c.category_b == b)
        .copied()
}

/// Detects the T/Y arrangement: one wall's profile face resting on the
/// other wall's side face. Returns (terminating wall, through wall,
/// engaged flank of the through wall).
fn tee_arrangement<'a>(
    wall_a: &'a Wall,
    wall_b: &'a Wall,
    contacts: &[Contact],
) -> Option<(&'a Wall, &'a Wall, &'a crate::geometry::OrientedFace)> {
    if let Some(contact) = find_pair(contacts, FaceCategory::Profile, FaceCategory::Side) {
        let flank = wall_b.categorized_faces()[contact.face_b].0;
        return Some((wall_a, wall_b, flank));
    }
    if let Some(contact) = find_pair(contacts, FaceCategory::Side, FaceCategory::Profile) {
        let flank = wall_a.categorized_faces()[contact.face_a].0;
        return Some((wall_b, wall_a, flank));
    }
    None
}

/// Crossing point of the two base axes, if one exists.
fn axes_crossing(wall_a: &Wall, wall_b: &Wall) -> Option<Point3> {
    closest_point_between_lines(
        wall_a.start_point(),
        wall_a.orientation(),
        wall_b.start_point(),
        wall_b.orientation(),
    )
}

/// A genuine plan crossing: the base axes meet (no vertical gap) and
/// the meeting point lies within both wall spans.
fn plan_crossing(wall_a: &Wall, wall_b: &Wall) -> Option<Point3> {
    let junction = axes_crossing(wall_a, wall_b)?;
    for wall in [wall_a, wall_b] {
        let rel = junction - wall.start_point();
        let along = rel.dot(wall.orientation());
        if along < -DISTANCE_EPS || along > wall.length() + DISTANCE_EPS {
            return None;
        }
        let off_axis = (rel - wall.orientation() * along).norm();
        if off_axis > DISTANCE_EPS {
            return None;
        }
    }
    Some(junction)
}
