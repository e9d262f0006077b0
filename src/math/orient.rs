use super::{Point3, TOLERANCE};

/// Planar orientation of an ordered point triple, projected to the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
    /// The three points are collinear in plan.
    Collinear,
}

/// Orientation of the turn `a -> b -> c` in the XY plane.
///
/// Z coordinates are ignored; wall layout reasons in plan view.
#[must_use]
pub fn turn(a: &Point3, b: &Point3, c: &Point3) -> Turn {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > TOLERANCE {
        Turn::Left
    } else if cross < -TOLERANCE {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Lower hull chain of a point set in plan view (Andrew monotone chain).
///
/// Points are ordered by `(x, y)`; the chain runs from the leftmost to the
/// rightmost point. Duplicates and interior points are dropped.
#[must_use]
pub fn half_hull(points: &[Point3]) -> Vec<Point3> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.dedup_by(|a, b| (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE);
    build_chain(&sorted)
}

/// Convex hull of a point set in plan view (Andrew monotone chain).
///
/// Returns the hull vertices in counter-clockwise order, starting at the
/// leftmost-bottom point, without repeating the first vertex.
#[must_use]
pub fn convex_hull(points: &[Point3]) -> Vec<Point3> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        (a.x, a.y)
            .partial_cmp(&(b.x, b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.dedup_by(|a, b| (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE);
    if sorted.len() < 3 {
        return sorted;
    }

    let lower = build_chain(&sorted);
    let reversed: Vec<Point3> = sorted.iter().rev().copied().collect();
    let upper = build_chain(&reversed);

    let mut hull = lower;
    hull.pop();
    hull.extend(upper.iter().take(upper.len().saturating_sub(1)));
    hull
}

/// One monotone hull chain over pre-sorted input.
fn build_chain(sorted: &[Point3]) -> Vec<Point3> {
    let mut chain: Vec<Point3> = Vec::with_capacity(sorted.len());
    for &pt in sorted {
        while chain.len() >= 2 {
            let a = chain[chain.len() - 2];
            let b = chain[chain.len() - 1];
            if turn(&a, &b, &pt) == Turn::Left {
                break;
            }
            chain.pop();
        }
        chain.push(pt);
    }
    chain
}

/// The candidate point closest to `origin`, or `None` for an empty slice.
///
/// Ties keep the earliest candidate, so the result is deterministic.
#[must_use]
pub fn nearest_point(origin: &Point3, candidates: &[Point3]) -> Option<Point3> {
    let mut best: Option<(f64, Point3)> = None;
    for &cand in candidates {
        let dist = (cand - origin).norm_squared();
        match best {
            Some((best_dist, _)) if dist >= best_dist => {}
            _ => best = Some((dist, cand)),
        }
    }
    best.map(|(_, pt)| pt)
}
