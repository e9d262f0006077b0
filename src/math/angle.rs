use super::{Vector3, TOLERANCE};

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so nearly parallel
/// or anti-parallel inputs cannot fall outside the domain.
///
/// Returns `None` if either vector has zero length.
#[must_use]
pub fn angle_between_deg(a: &Vector3, b: &Vector3) -> Option<f64> {
    let la = a.norm();
    let lb = b.norm();
    if la < TOLERANCE || lb < TOLERANCE {
        return None;
    }
    let cos = (a.dot(b) / (la * lb)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// The (small, big) angle pair between two wall axes, in degrees.
///
/// Direction signs along a wall axis are arbitrary, so the pair is
/// normalized: `small <= big` and `small + big == 180`.
///
/// Returns `None` if either axis has zero length.
#[must_use]
pub fn axis_angle_pair_deg(a: &Vector3, b: &Vector3) -> Option<(f64, f64)> {
    let theta = angle_between_deg(a, b)?;
    let small = theta.min(180.0 - theta);
    Some((small, 180.0 - small))
}
