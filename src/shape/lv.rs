use crate::math::angle::angle_between_deg;
use crate::math::Point3;
use crate::wall::Wall;

use super::member::ShapeMember;

/// Two walls meeting end-to-end at a square corner.
#[derive(Debug, Clone, PartialEq)]
pub struct LShape {
    host: ShapeMember,
    guest: ShapeMember,
    junction_point: Point3,
    interior_point: Point3,
    exterior_point: Point3,
    angle: f64,
}

/// Two walls meeting end-to-end at a non-square corner.
#[derive(Debug, Clone, PartialEq)]
pub struct VShape {
    host: ShapeMember,
    guest: ShapeMember,
    junction_point: Point3,
    interior_point: Point3,
    exterior_point: Point3,
    angle: f64,
}

/// Corner landmarks shared by the L and V builders.
///
/// The interior point is the junction dropped onto the host's interior
/// profile plane; the exterior point sits one wall length down the axis,
/// on the exterior profile plane.
fn corner_landmarks(host: &ShapeMember, junction: &Point3) -> (Point3, Point3) {
    let interior = host.interior_face().project_onto_plane(junction);
    let exterior = interior + host.away_direction() * host.wall().length();
    (interior, exterior)
}

/// The corner opening angle: between the two axis directions leading
/// away from the junction.
fn corner_angle(host: &ShapeMember, guest: &ShapeMember) -> Option<f64> {
    angle_between_deg(&host.away_direction(), &guest.away_direction())
}

impl LShape {
    pub(crate) fn build(host_wall: &Wall, guest_wall: &Wall, junction: Point3) -> Self {
        let host = ShapeMember::from_junction(host_wall, &junction);
        let guest = ShapeMember::from_junction(guest_wall, &junction);
        let (interior_point, exterior_point) = corner_landmarks(&host, &junction);
        Self {
            host,
            guest,
            junction_point: junction,
            interior_point,
            exterior_point,
            // The classifier only dispatches here at 90 degrees; pin the
            // angle exactly so downstream equality checks hold.
            angle: 90.0,
        }
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

    /// Returns the junction point.
    #[must_use]
    pub fn junction_point(&self) -> &Point3 {
        &self.junction_point
    }

    /// Corner point on the concave side, on the host interior profile plane.
    #[must_use]
    pub fn interior_point(&self) -> &Point3 {
        &self.interior_point
    }

    /// Matching point at the host's free end, on the exterior profile plane.
    #[must_use]
    pub fn exterior_point(&self) -> &Point3 {
        &self.exterior_point
    }

    /// Corner angle in degrees (always exactly 90).
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl VShape {
    pub(crate) fn build(host_wall: &Wall, guest_wall: &Wall, junction: Point3) -> Option<Self> {
        let host = ShapeMember::from_junction(host_wall, &junction);
        let guest = ShapeMember::from_junction(guest_wall, &junction);
        let angle = corner_angle(&host, &guest)?;
        let (interior_point, exterior_point) = corner_landmarks(&host, &junction);
        Some(Self {
            host,
            guest,
            junction_point: junction,
            interior_point,
            exterior_point,
            angle,
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

    /// Returns the junction point.
    #[must_use]
    pub fn junction_point(&self) -> &Point3 {
        &self.junction_point
    }

    /// Corner point on the concave side, on the host interior profile plane.
    #[must_use]
    pub fn interior_point(&self) -> &Point3 {
        &self.interior_point
    }

    /// Matching point at the host's free end, on the exterior profile plane.
    #[must_use]
    pub fn exterior_point(&self) -> &Point3 {
        &self.exterior_point
    }

    /// Corner opening angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}
