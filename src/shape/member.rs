use crate::geometry::OrientedFace;
use crate::math::{Point3, Vector3};
use crate::wall::Wall;

/// Selector for one of a wall's two side faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideFaceId {
    First,
    Second,
}

/// Selector for one of a wall's two profile faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFaceId {
    Third,
    Fourth,
}

/// A wall augmented with its junction-relative face roles.
///
/// Roles are handles into the member wall's own face pairs rather than
/// face copies: the close/far pair selects among the side faces, the
/// interior/exterior pair among the profile faces. The face of a pair
/// whose center lies nearer the junction is the close (resp. interior)
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMember {
    wall: Wall,
    direction_close_far_side: Vector3,
    closeside: SideFaceId,
    farside: SideFaceId,
    interior: ProfileFaceId,
    exterior: ProfileFaceId,
}

impl ShapeMember {
    /// Assigns face roles for `wall` relative to a junction point.
    pub(crate) fn from_junction(wall: &Wall, junction: &Point3) -> Self {
        let (first, second) = wall.side_faces();
        let first_dist = (first.center_point() - junction).norm();
        let second_dist = (second.center_point() - junction).norm();
        let (closeside, farside) = if first_dist <= second_dist {
            (SideFaceId::First, SideFaceId::Second)
        } else {
            (SideFaceId::Second, SideFaceId::First)
        };

        let (third, fourth) = wall.profile_faces();
        let third_dist = (third.center_point() - junction).norm();
        let fourth_dist = (fourth.center_point() - junction).norm();
        let (interior, exterior) = if third_dist <= fourth_dist {
            (ProfileFaceId::Third, ProfileFaceId::Fourth)
        } else {
            (ProfileFaceId::Fourth, ProfileFaceId::Third)
        };

        let close_center = side_face(wall, closeside).center_point();
        let far_center = side_face(wall, farside).center_point();
        let direction_close_far_side = (far_center - close_center).normalize();

        Self {
            wall: wall.clone(),
            direction_close_far_side,
            closeside,
            farside,
            interior,
            exterior,
        }
    }

    /// Returns the member wall.
    #[must_use]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Unit vector from the close side face toward the far side face.
    #[must_use]
    pub fn direction_close_far_side(&self) -> &Vector3 {
        &self.direction_close_far_side
    }

    /// The side face nearer the junction.
    #[must_use]
    pub fn closeside_face(&self) -> &OrientedFace {
        side_face(&self.wall, self.closeside)
    }

    /// The side face farther from the junction.
    #[must_use]
    pub fn farside_face(&self) -> &OrientedFace {
        side_face(&self.wall, self.farside)
    }

    /// The profile face nearer the junction.
    #[must_use]
    pub fn interior_face(&self) -> &OrientedFace {
        profile_face(&self.wall, self.interior)
    }

    /// The profile face farther from the junction.
    #[must_use]
    pub fn exterior_face(&self) -> &OrientedFace {
        profile_face(&self.wall, self.exterior)
    }

    /// Returns the closeside selector.
    #[must_use]
    pub fn closeside(&self) -> SideFaceId {
        self.closeside
    }

    /// Returns the interior selector.
    #[must_use]
    pub fn interior(&self) -> ProfileFaceId {
        self.interior
    }

    /// Unit vector along the wall axis pointing away from the junction
    /// (from the interior profile face toward the exterior one).
    #[must_use]
    pub(crate) fn away_direction(&self) -> Vector3 {
        (self.exterior_face().center_point() - self.interior_face().center_point()).normalize()
    }
}

fn side_face(wall: &Wall, id: SideFaceId) -> &OrientedFace {
    match id {
        SideFaceId::First => wall.first_face(),
        SideFaceId::Second => wall.second_face(),
    }
}

fn profile_face(wall: &Wall, id: ProfileFaceId) -> &OrientedFace {
    match id {
        ProfileFaceId::Third => wall.third_face(),
        ProfileFaceId::Fourth => wall.fourth_face(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn roles_follow_junction_distance() {
        let wall = Wall::from_axis(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0), 240.0, 2500.0).unwrap();
        let member = ShapeMember::from_junction(&wall, &p(0.0, 500.0, 0.0));

        // Junction is beyond the start point, on the +Y flank.
        assert_eq!(member.interior(), ProfileFaceId::Third);
        assert_eq!(member.closeside(), SideFaceId::First);
        assert_eq!(member.interior_face(), wall.third_face());
        assert_eq!(member.exterior_face(), wall.fourth_face());
        assert_eq!(member.closeside_face(), wall.first_face());
        assert_eq!(member.farside_face(), wall.second_face());

        // Close-to-far crosses the wall thickness, away runs down the axis.
        assert!((member.direction_close_far_side() - Vector3::new(0.0, -1.0, 0.0)).norm() < TOLERANCE);
        assert!((member.away_direction() - Vector3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn roles_flip_with_junction_at_far_end() {
        let wall = Wall::from_axis(p(0.0, 0.0, 0.0), p(5000.0, 0.0, 0.0), 240.0, 2500.0).unwrap();
        let member = ShapeMember::from_junction(&wall, &p(5000.0, -500.0, 0.0));
        assert_eq!(member.interior(), ProfileFaceId::Fourth);
        assert_eq!(member.closeside(), SideFaceId::Second);
    }
}
