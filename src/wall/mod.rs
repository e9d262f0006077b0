use crate::error::{GeometryError, Result};
use crate::geometry::{OrientedFace, Segment};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Which face pair of a wall a given face belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceCategory {
    /// One of the two long faces along the wall axis.
    Side,
    /// One of the two end faces.
    Profile,
    Top,
    Bottom,
}

/// A wall as a rectangular prism: two side faces along the axis, two
/// profile faces at the ends, top and bottom.
///
/// Built once from its axis and cross-section; read-only afterwards.
/// Face normals point out of the prism.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    first_face: OrientedFace,
    second_face: OrientedFace,
    third_face: OrientedFace,
    fourth_face: OrientedFace,
    top_face: OrientedFace,
    bottom_face: OrientedFace,
    start_point: Point3,
    end_point: Point3,
    location_line: Segment,
    orientation: Vector3,
    length: f64,
    width: f64,
    height: f64,
}

impl Wall {
    /// Builds a wall prism from its base axis, thickness and height.
    ///
    /// The axis runs along the wall base from `start` to `end` and must
    /// be horizontal; walls are plumb prisms.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-length or sloped axis, or for a
    /// non-positive width or height.
    pub fn from_axis(start: Point3, end: Point3, width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GeometryError::NonPositiveDimension {
                dimension: "width",
                value: width,
            }
            .into());
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(GeometryError::NonPositiveDimension {
                dimension: "height",
                value: height,
            }
            .into());
        }

        let axis = end - start;
        let length = axis.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let rise = axis.z.abs();
        if rise > TOLERANCE {
            return Err(GeometryError::SlopedWallAxis { rise, length }.into());
        }
        let orientation = axis / length;

        let up = Vector3::new(0.0, 0.0, 1.0);
        let side = up.cross(&orientation);
        let offset = side * (width / 2.0);
        let lift = up * height;

        let first_face = OrientedFace::new(
            [start + offset, end + offset, end + offset + lift, start + offset + lift],
            side,
        )?;
        let second_face = OrientedFace::new(
            [start - offset, end - offset, end - offset + lift, start - offset + lift],
            -side,
        )?;
        let third_face = OrientedFace::new(
            [start - offset, start + offset, start + offset + lift, start - offset + lift],
            -orientation,
        )?;
        let fourth_face = OrientedFace::new(
            [end - offset, end + offset, end + offset + lift, end - offset + lift],
            orientation,
        )?;
        let bottom_face = OrientedFace::new(
            [start - offset, end - offset, end + offset, start + offset],
            -up,
        )?;
        let top_face = OrientedFace::new(
            [
                start - offset + lift,
                end - offset + lift,
                end + offset + lift,
                start + offset + lift,
            ],
            up,
        )?;

        let location_line = Segment::new(start, end)?;

        Ok(Self {
            first_face,
            second_face,
            third_face,
            fourth_face,
            top_face,
            bottom_face,
            start_point: start,
            end_point: end,
            location_line,
            orientation,
            length,
            width,
            height,
        })
    }

    /// Returns the first side face (left of the axis direction).
    #[must_use]
    pub fn first_face(&self) -> &OrientedFace {
        &self.first_face
    }

    /// Returns the second side face (right of the axis direction).
    #[must_use]
    pub fn second_face(&self) -> &OrientedFace {
        &self.second_face
    }

    /// Returns the third face — the profile face at the start point.
    #[must_use]
    pub fn third_face(&self) -> &OrientedFace {
        &self.third_face
    }

    /// Returns the fourth face — the profile face at the end point.
    #[must_use]
    pub fn fourth_face(&self) -> &OrientedFace {
        &self.fourth_face
    }

    /// Returns the top face.
    #[must_use]
    pub fn top_face(&self) -> &OrientedFace {
        &self.top_face
    }

    /// Returns the bottom face.
    #[must_use]
    pub fn bottom_face(&self) -> &OrientedFace {
        &self.bottom_face
    }

    /// Returns the side face pair `(first, second)`.
    #[must_use]
    pub fn side_faces(&self) -> (&OrientedFace, &OrientedFace) {
        (&self.first_face, &self.second_face)
    }

    /// Returns the profile face pair `(third, fourth)`.
    #[must_use]
    pub fn profile_faces(&self) -> (&OrientedFace, &OrientedFace) {
        (&self.third_face, &self.fourth_face)
    }

    /// All six faces with their categories, in classifier probe order.
    #[must_use]
    pub fn categorized_faces(&self) -> [(&OrientedFace, FaceCategory); 6] {
        [
            (&self.first_face, FaceCategory::Side),
            (&self.second_face, FaceCategory::Side),
            (&self.third_face, FaceCategory::Profile),
            (&self.fourth_face, FaceCategory::Profile),
            (&self.top_face, FaceCategory::Top),
            (&self.bottom_face, FaceCategory::Bottom),
        ]
    }

    /// Returns the axis start point.
    #[must_use]
    pub fn start_point(&self) -> &Point3 {
        &self.start_point
    }

    /// Returns the axis end point.
    #[must_use]
    pub fn end_point(&self) -> &Point3 {
        &self.end_point
    }

    /// Returns the base axis segment.
    #[must_use]
    pub fn location_line(&self) -> &Segment {
        &self.location_line
    }

    /// Returns the unit axis direction.
    #[must_use]
    pub fn orientation(&self) -> &Vector3 {
        &self.orientation
    }

    /// Returns the wall length along the axis.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the wall thickness.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the wall height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The horizontal unit normal of the wall axis (left of the
    /// direction of travel).
    #[must_use]
    pub fn side_normal(&self) -> Vector3 {
        Vector3::new(0.0, 0.0, 1.0).cross(&self.orientation)
    }
}
