use crate::geometry::OrientedFace;
use crate::math::intersect_3d::line_plane_point;
use crate::math::{Point3, Vector3};
use crate::wall::Wall;

use super::member::ShapeMember;

/// A wall terminating square against another wall's flank.
#[derive(Debug, Clone, PartialEq)]
pub struct TShape {
    host: ShapeMember,
    guest: ShapeMember,
    junction_point: Point3,
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
    direction_hostface_one_hostface_two: Vector3,
    direction_closeface_farface: Vector3,
    angle_1: f64,
    angle_2: f64,
}

/// A wall terminating obliquely against another wall's flank.
#[derive(Debug, Clone, PartialEq)]
pub struct YShape {
    host: ShapeMember,
    guest: ShapeMember,
    junction_point: Point3,
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
    direction_hostface_one_hostface_two: Vector3,
    direction_closeface_farface: Vector3,
    angle_1: f64,
    angle_2: f64,
}

/// Landmarks shared by the T and Y builders.
///
/// The host is the terminating wall; `near_flank` is the guest side face
/// its end rests on. The junction is the host axis hit on that flank;
/// the interior pair straddles the junction by half the host width, on
/// the host's interior profile plane. The exterior pair repeats the
/// construction on the guest's far flank.
struct TeeLandmarks {
    junction: Point3,
    interior_points: [Point3; 2],
    exterior_points: [Point3; 2],
}

fn tee_landmarks(host: &Wall, guest: &Wall, near_flank: &OrientedFace) -> Option<TeeLandmarks> {
    let junction = line_plane_point(
        host.start_point(),
        host.orientation(),
        near_flank.center_point(),
        near_flank.normal(),
    )?;

    let (first, second) = guest.side_faces();
    let far_flank = if near_flank == first { second } else { first };
    let far_junction = line_plane_point(
        host.start_point(),
        host.orientation(),
        far_flank.center_point(),
        far_flank.normal(),
    )?;

    let spread = host.side_normal() * (host.width() / 2.0);
    Some(TeeLandmarks {
        junction,
        interior_points: [junction + spread, junction - spread],
        exterior_points: [far_junction + spread, far_junction - spread],
    })
}

fn tee_members(
    host_wall: &Wall,
    guest_wall: &Wall,
    junction: &Point3,
) -> (ShapeMember, ShapeMember) {
    (
        ShapeMember::from_junction(host_wall, junction),
        ShapeMember::from_junction(guest_wall, junction),
    )
}

impl TShape {
    pub(crate) fn build(
        host_wall: &Wall,
        guest_wall: &Wall,
        near_flank: &OrientedFace,
    ) -> Option<Self> {
        let landmarks = tee_landmarks(host_wall, guest_wall, near_flank)?;
        let (host, guest) = tee_members(host_wall, guest_wall, &landmarks.junction);
        let direction_hostface_one_hostface_two = across_host(&host);
        let direction_closeface_farface = *guest.direction_close_far_side();
        Some(Self {
            host,
            guest,
            junction_point: landmarks.junction,
            interior_points: landmarks.interior_points,
            exterior_points: landmarks.exterior_points,
            direction_hostface_one_hostface_two,
            direction_closeface_farface,
            // Dispatched at 90 degrees on both sides; pinned exactly.
            angle_1: 90.0,
            angle_2: 90.0,
        })
    }

    /// Returns the host member (the terminating wall).
    #[must_use]
    pub fn host_wall(&self) -> &ShapeMember {
        &self.host
    }

    /// Returns the guest member (the through wall).
    #[must_use]
    pub fn guest_wall(&self) -> &ShapeMember {
        &self.guest
    }

    /// Returns the junction point on the guest's near flank.
    #[must_use]
    pub fn junction_point(&self) -> &Point3 {
        &self.junction_point
    }

    /// The two junction corners on the host's interior profile plane.
    #[must_use]
    pub fn interior_points(&self) -> &[Point3; 2] {
        &self.interior_points
    }

    /// The matching corner pair on the guest's far flank.
    #[must_use]
    pub fn exterior_points(&self) -> &[Point3; 2] {
        &self.exterior_points
    }

    /// Unit vector from the host's first side face to its second.
    #[must_use]
    pub fn direction_hostface_one_hostface_two(&self) -> &Vector3 {
        &self.direction_hostface_one_hostface_two
    }

    /// Unit vector from the guest's close flank to its far flank.
    #[must_use]
    pub fn direction_closeface_farface(&self) -> &Vector3 {
        &self.direction_closeface_farface
    }

    /// Junction angles in degrees (both exactly 90).
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_1, self.angle_2)
    }
}

impl YShape {
    pub(crate) fn build(
        host_wall: &Wall,
        guest_wall: &Wall,
        near_flank: &OrientedFace,
        angle_pair: (f64, f64),
    ) -> Option<Self> {
        let landmarks = tee_landmarks(host_wall, guest_wall, near_flank)?;
        let (host, guest) = tee_members(host_wall, guest_wall, &landmarks.junction);
        let direction_hostface_one_hostface_two = across_host(&host);
        let direction_closeface_farface = *guest.direction_close_far_side();
        Some(Self {
            host,
            guest,
            junction_point: landmarks.junction,
            interior_points: landmarks.interior_points,
            exterior_points: landmarks.exterior_points,
            direction_hostface_one_hostface_two,
            direction_closeface_farface,
            angle_1: angle_pair.0,
            angle_2: angle_pair.1,
        })
    }

    /// Returns the host member (the terminating wall).
    #[must_use]
    pub fn host_wall(&self) -> &ShapeMember {
        &self.host
    }

    /// Returns the guest member (the through wall).
    #[must_use]
    pub fn guest_wall(&self) -> &ShapeMember {
        &self.guest
    }

    /// Returns the junction point on the guest's near flank.
    #[must_use]
    pub fn junction_point(&self) -> &Point3 {
        &self.junction_point
    }

    /// The two junction corners on the host's interior profile plane.
    #[must_use]
    pub fn interior_points(&self) -> &[Point3; 2] {
        &self.interior_points
    }

    /// The matching corner pair on the guest's far flank.
    #[must_use]
    pub fn exterior_points(&self) -> &[Point3; 2] {
        &self.exterior_points
    }

    /// Unit vector from the host's first side face to its second.
    #[must_use]
    pub fn direction_hostface_one_hostface_two(&self) -> &Vector3 {
        &self.direction_hostface_one_hostface_two
    }

    /// Unit vector from the guest's close flank to its far flank.
    #[must_use]
    pub fn direction_closeface_farface(&self) -> &Vector3 {
        &self.direction_closeface_farface
    }

    /// Junction angles in degrees, ordered `angle_1 <= angle_2`.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_1, self.angle_2)
    }
}

fn across_host(host: &ShapeMember) -> Vector3 {
    let (first, second) = host.wall().side_faces();
    (second.center_point() - first.center_point()).normalize()
}
