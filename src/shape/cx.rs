use crate::math::intersect_3d::offset_axes_intersection;
use crate::math::{Point3, Vector3};
use crate::wall::Wall;

use super::member::{ShapeMember, SideFaceId};

/// Two walls crossing through each other at right angles.
#[derive(Debug, Clone, PartialEq)]
pub struct CShape {
    host: ShapeMember,
    guest: ShapeMember,
    intersection_point: Point3,
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
    direction_1: Vector3,
    direction_2: Vector3,
    angle_1: f64,
    angle_2: f64,
}

/// Two walls crossing through each other at a general angle.
#[derive(Debug, Clone, PartialEq)]
pub struct XShape {
    host: ShapeMember,
    guest: ShapeMember,
    intersection_point: Point3,
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
    direction_1: Vector3,
    direction_2: Vector3,
    angle_1: f64,
    angle_2: f64,
}

/// The four plan corners of the crossing region: pairwise intersections
/// of the two walls' side-face planes at the junction height. The pair
/// on the host's closeside plane is the interior pair, the pair on its
/// farside plane the exterior pair.
struct CrossingLandmarks {
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
}

fn crossing_landmarks(
    host: &ShapeMember,
    guest: &ShapeMember,
    junction: &Point3,
) -> Option<CrossingLandmarks> {
    let host_wall = host.wall();
    let guest_wall = guest.wall();
    let host_close = signed_offset(host_wall.width(), host.closeside() == SideFaceId::First);
    let guest_close = signed_offset(guest_wall.width(), guest.closeside() == SideFaceId::First);

    let corner = |host_offset: f64, guest_offset: f64| {
        offset_axes_intersection(
            junction,
            &host_wall.side_normal(),
            host_offset,
            &guest_wall.side_normal(),
            guest_offset,
        )
    };

    Some(CrossingLandmarks {
        interior_points: [
            corner(host_close, guest_close)?,
            corner(host_close, -guest_close)?,
        ],
        exterior_points: [
            corner(-host_close, guest_close)?,
            corner(-host_close, -guest_close)?,
        ],
    })
}

fn signed_offset(width: f64, close_is_first: bool) -> f64 {
    if close_is_first {
        width / 2.0
    } else {
        -width / 2.0
    }
}

impl CShape {
    pub(crate) fn build(host_wall: &Wall, guest_wall: &Wall, junction: Point3) -> Option<Self> {
        let host = ShapeMember::from_junction(host_wall, &junction);
        let guest = ShapeMember::from_junction(guest_wall, &junction);
        let landmarks = crossing_landmarks(&host, &guest, &junction)?;
        Some(Self {
            direction_1: *host_wall.orientation(),
            direction_2: *guest_wall.orientation(),
            host,
            guest,
            intersection_point: junction,
            interior_points: landmarks.interior_points,
            exterior_points: landmarks.exterior_points,
            // Dispatched at 90 degrees; pinned exactly.
            angle_1: 90.0,
            angle_2: 90.0,
        })
    }

    /// Returns the host member (the first wall of the classified pair).
    #[must_use]
    pub fn host_wall(&self) -> &ShapeMember {
        &self.host
    }

    /// Returns the guest member.
    #[must_use]
    pub fn guest_wall(&self) -> &ShapeMember {
        &self.guest
    }

    /// Returns the axis crossing point.
    #[must_use]
    pub fn intersection_point(&self) -> &Point3 {
        &self.intersection_point
    }

    /// Crossing corners on the host's closeside plane.
    #[must_use]
    pub fn interior_points(&self) -> &[Point3; 2] {
        &self.interior_points
    }

    /// Crossing corners on the host's farside plane.
    #[must_use]
    pub fn exterior_points(&self) -> &[Point3; 2] {
        &self.exterior_points
    }

    /// Returns the two axis directions.
    #[must_use]
    pub fn directions(&self) -> (&Vector3, &Vector3) {
        (&self.direction_1, &self.direction_2)
    }

    /// Crossing angles in degrees (both exactly 90).
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_1, self.angle_2)
    }
}

impl XShape {
    pub(crate) fn build(
        host_wall: &Wall,
        guest_wall: &Wall,
        junction: Point3,
        angle_pair: (f64, f64),
    ) -> Option<Self> {
        let host = ShapeMember::from_junction(host_wall, &junction);
        let guest = ShapeMember::from_junction(guest_wall, &junction);
        let landmarks = crossing_landmarks(&host, &guest, &junction)?;
        Some(Self {
            direction_1: *host_wall.orientation(),
            direction_2: *guest_wall.orientation(),
            host,
            guest,
            intersection_point: junction,
            interior_points: landmarks.interior_points,
            exterior_points: landmarks.exterior_points,
            angle_1: angle_pair.0,
            angle_2: angle_pair.1,
        })
    }

    /// Returns the host member (the first wall of the classified pair).
    #[must_use]
    pub fn host_wall(&self) -> &ShapeMember {
        &self.host
    }

    /// Returns the guest member.
    #[must_use]
    pub fn guest_wall(&self) -> &ShapeMember {
        &self.guest
    }

    /// Returns the axis crossing point.
    #[must_use]
    pub fn intersection_point(&self) -> &Point3 {
        &self.intersection_point
    }

    /// Crossing corners on the host's closeside plane.
    #[must_use]
    pub fn interior_points(&self) -> &[Point3; 2] {
        &self.interior_points
    }

    /// Crossing corners on the host's farside plane.
    #[must_use]
    pub fn exterior_points(&self) -> &[Point3; 2] {
        &self.exterior_points
    }

    /// Returns the two axis directions.
    #[must_use]
    pub fn directions(&self) -> (&Vector3, &Vector3) {
        (&self.direction_1, &self.direction_2)
    }

    /// Crossing angles in degrees, ordered `angle_1 <= angle_2`.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_1, self.angle_2)
    }
}
