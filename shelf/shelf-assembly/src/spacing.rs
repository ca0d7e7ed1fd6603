//! The repetition planner: evenly spaced anchor selection.
//!
//! Repeated substructures (consoles and the levels they carry) are placed
//! on a subset of a part's anchors. The planner filters the anchor set by a
//! role-prefix convention, sorts the candidates along the vertical axis,
//! and picks a parametric count of evenly spaced entries, skipping the two
//! extremes.

// Candidate counts are tiny; index arithmetic cannot overflow or lose
// meaningful precision.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use shelf_types::{Anchor, Part};

/// Collect a part's anchors whose name starts with `prefix`, sorted by
/// vertical (Y) coordinate ascending. Ties are broken by name so the order
/// is fully deterministic.
///
/// # Example
///
/// ```
/// use shelf_assembly::spacing::candidates_with_prefix;
/// use shelf_types::{Part, Point3};
///
/// let stand = Part::new("stand")
///     .with_anchor("console_1", Point3::new(0.0, 30.0, 0.0))
///     .with_anchor("console_0", Point3::new(0.0, 12.0, 0.0))
///     .with_anchor("leg", Point3::new(0.0, -10.0, 0.0));
///
/// let candidates = candidates_with_prefix(&stand, "console_");
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].name, "console_0");
/// ```
#[must_use]
pub fn candidates_with_prefix(part: &Part, prefix: &str) -> Vec<Anchor> {
    let mut candidates = part.anchors().with_prefix(prefix);
    candidates.sort_by(|a, b| {
        a.point
            .y
            .total_cmp(&b.point.y)
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates
}

/// Select `count` evenly spaced anchors from an ordered candidate list.
///
/// With `n` candidates, the selection step is `n / (count + 1)` and the
/// picked indices are `round(i * step)` for `i in 1..=count`, clamped to
/// the valid range — the two extremes are skipped when the count allows.
/// The result preserves the candidates' ascending order.
///
/// `count = 0` and an empty candidate list both yield an empty selection.
/// When `count >= n` the same index can be picked more than once and the
/// duplicates are kept, so the result always holds exactly `count` anchors;
/// callers that cannot tolerate coincident placements must reject such
/// counts up front (the composer does).
///
/// # Example
///
/// ```
/// use shelf_assembly::spacing::select_evenly_spaced;
/// use shelf_types::{Anchor, Point3};
///
/// let candidates: Vec<Anchor> = (0..10)
///     .map(|i| Anchor::new(format!("console_{i}"), Point3::new(0.0, f64::from(i), 0.0)))
///     .collect();
///
/// let selected = select_evenly_spaced(&candidates, 3);
/// let names: Vec<&str> = selected.iter().map(|a| a.name.as_str()).collect();
/// assert_eq!(names, vec!["console_3", "console_5", "console_8"]);
/// ```
#[must_use]
pub fn select_evenly_spaced(candidates: &[Anchor], count: usize) -> Vec<Anchor> {
    if candidates.is_empty() || count == 0 {
        return Vec::new();
    }

    let step = candidates.len() as f64 / (count + 1) as f64;
    let last = candidates.len() - 1;

    (1..=count)
        .map(|i| {
            let index = (i as f64 * step).round() as usize;
            candidates[index.min(last)].clone()
        })
        .collect()
}
