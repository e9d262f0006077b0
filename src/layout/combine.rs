use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::math::DISTANCE_EPS;

use super::catalog::PanelCatalog;

/// Whether a solver result lands inside the requested tolerance.
///
/// An out-of-tolerance result is still the best greedy effort — callers
/// decide whether to retry with relaxed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    InTolerance,
    OutOfTolerance,
}

/// An ordered panel selection covering a span, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    widths: Vec<f64>,
    status: FitStatus,
}

impl Combination {
    /// The selected widths in placement order.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Sum of the selected widths.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Whether the selection lands inside the requested range.
    #[must_use]
    pub fn status(&self) -> FitStatus {
        self.status
    }
}

/// A panel selection plus the continuous filler closing the span.
#[derive(Debug, Clone, PartialEq)]
pub struct FillerCombination {
    widths: Vec<f64>,
    filler: f64,
    status: FitStatus,
}

impl FillerCombination {
    /// The selected catalog widths in placement order.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// The residual filler width (not a catalog entry).
    #[must_use]
    pub fn filler(&self) -> f64 {
        self.filler
    }

    /// Sum of the selected widths.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Whether the filler stayed within the allowed maximum.
    #[must_use]
    pub fn status(&self) -> FitStatus {
        self.status
    }
}

/// Selects catalog widths whose sum lands in `[min_target, max_target]`.
///
/// Greedy largest-first with backtracking: a depth-first search over
/// non-increasing width sequences that prunes any branch exceeding
/// `max_target` and stops at the first in-range sum. With
/// `prefer_small` the element-size preference is reversed (smallest
/// first); the search structure is unchanged.
///
/// When no selection can land in the range, the plain greedy prefix is
/// returned marked [`FitStatus::OutOfTolerance`] instead of an error,
/// so callers can retry with relaxed bounds.
///
/// # Errors
///
/// Returns an error for non-positive or non-finite targets, or when
/// `min_target > max_target`.
pub fn best_combination_without_fillers(
    catalog: &PanelCatalog,
    min_target: f64,
    max_target: f64,
    prefer_small: bool,
) -> Result<Combination> {
    check_target("min_target", min_target)?;
    check_target("max_target", max_target)?;
    if min_target > max_target {
        return Err(LayoutError::InvertedRange {
            min: min_target,
            max: max_target,
        }
        .into());
    }

    let mut order = catalog.widths().to_vec();
    if prefer_small {
        order.reverse();
    }

    let mut picked = Vec::new();
    if fill_range(&order, min_target, max_target, 0.0, 0, &mut picked) {
        return Ok(Combination {
            widths: picked,
            status: FitStatus::InTolerance,
        });
    }

    // No branch lands inside the range; fall back to the greedy prefix
    // under the cap and let the caller see the shortfall.
    let prefix = greedy_prefix(&order, max_target);
    debug!(
        min_target,
        max_target,
        reached = prefix.iter().sum::<f64>(),
        "no combination lands in range"
    );
    Ok(Combination {
        widths: prefix,
        status: FitStatus::OutOfTolerance,
    })
}

/// Selects catalog widths for an exact target span, closing the rest
/// with a continuous filler of at most `max_filler_width`.
///
/// Greedy largest-first with backtracking; a branch succeeds as soon as
/// the residual drops to `max_filler_width` or below. The returned
/// filler is `target - sum(widths)`, so the round trip is exact in
/// floating point. A target at or below `max_filler_width` needs no
/// panels at all.
///
/// When no branch succeeds (the maximum filler is smaller than every
/// gap the catalog can leave), the selection with the smallest residual
/// is returned marked [`FitStatus::OutOfTolerance`].
///
/// # Errors
///
/// Returns an error for a non-positive or non-finite target, or a
/// negative or non-finite maximum filler width.
pub fn best_combination_with_fillers(
    catalog: &PanelCatalog,
    target: f64,
    max_filler_width: f64,
) -> Result<FillerCombination> {
    check_target("target", target)?;
    if !max_filler_width.is_finite() || max_filler_width < 0.0 {
        return Err(LayoutError::InvalidFillerWidth(max_filler_width).into());
    }

    let order = catalog.widths();
    let mut picked = Vec::new();
    let mut fallback = Fallback {
        residual: f64::INFINITY,
        widths: Vec::new(),
    };

    if fill_to_filler(order, max_filler_width, target, 0, &mut picked, &mut fallback) {
        let filler = target - picked.iter().sum::<f64>();
        return Ok(FillerCombination {
            widths: picked,
            filler,
            status: FitStatus::InTolerance,
        });
    }

    debug!(
        target,
        max_filler_width,
        residual = fallback.residual,
        "no combination leaves a permissible filler"
    );
    let filler = target - fallback.widths.iter().sum::<f64>();
    Ok(FillerCombination {
        widths: fallback.widths,
        filler,
        status: FitStatus::OutOfTolerance,
    })
}

fn check_target(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::InvalidTarget { parameter, value }.into());
    }
    Ok(())
}

/// Depth-first search for a sum in `[min, max]`. Widths at or past
/// `start` keep the sequence ordered by traversal preference. The range
/// check absorbs the same contact tolerance the classifier uses, so
/// CAD-export noise on the targets cannot flip a fit.
fn fill_range(
    order: &[f64],
    min: f64,
    max: f64,
    total: f64,
    start: usize,
    picked: &mut Vec<f64>,
) -> bool {
    if total >= min - DISTANCE_EPS && total <= max + DISTANCE_EPS {
        return true;
    }
    for (i, &width) in order.iter().enumerate().skip(start) {
        if total + width > max + DISTANCE_EPS {
            continue;
        }
        picked.push(width);
        if fill_range(order, min, max, total + width, i, picked) {
            return true;
        }
        picked.pop();
    }
    false
}

struct Fallback {
    residual: f64,
    widths: Vec<f64>,
}

/// Depth-first search until the residual fits the filler allowance.
/// Dead ends record the best partial selection seen.
fn fill_to_filler(
    order: &[f64],
    max_filler: f64,
    remaining: f64,
    start: usize,
    picked: &mut Vec<f64>,
    fallback: &mut Fallback,
) -> bool {
    if remaining <= max_filler + DISTANCE_EPS {
        return true;
    }
    for (i, &width) in order.iter().enumerate().skip(start) {
        if width > remaining {
            continue;
        }
        picked.push(width);
        if fill_to_filler(order, max_filler, remaining - width, i, picked, fallback) {
            return true;
        }
        picked.pop();
    }
    if remaining < fallback.residual {
        fallback.residual = remaining;
        fallback.widths = picked.clone();
    }
    false
}

/// Plain greedy prefix: largest widths while the cap holds.
fn greedy_prefix(order: &[f64], max: f64) -> Vec<f64> {
    let mut picked = Vec::new();
    let mut total = 0.0;
    for &width in order {
        while total + width <= max {
            picked.push(width);
            total += width;
        }
    }
    picked
}
