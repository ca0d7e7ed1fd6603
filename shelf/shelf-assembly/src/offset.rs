//! The offset resolver: relative placement vectors from anchor pairs.
//!
//! Every placement in the assembly pipeline is built from one rule: the
//! translation that makes a target part's anchor coincide with a reference
//! anchor is the difference of the two anchor points. Chained offsets (a
//! console relative to a stand relative to a panel) compose by plain vector
//! addition, which is associative because anchors are expressed in each
//! part's own local frame and no rotation is applied.

use nalgebra::{Point3, Vector3};
use shelf_types::Part;

use crate::error::{AssemblyError, AssemblyResult};

/// Look up an anchor point on a part.
///
/// # Errors
///
/// Returns [`AssemblyError::MissingAnchor`] if the part has no such anchor.
pub fn anchor_point(part: &Part, anchor: &str) -> AssemblyResult<Point3<f64>> {
    part.anchor(anchor)
        .copied()
        .ok_or_else(|| AssemblyError::MissingAnchor {
            part_id: part.id().to_string(),
            anchor: anchor.to_string(),
        })
}

/// Compute the translation that aligns `to`'s anchor onto `from`'s anchor.
///
/// Applied to `to`, the returned vector makes `to_anchor` coincide with
/// `from_anchor` in the frame where `from` is already placed. The result is
/// anti-symmetric: swapping the `(from, to)` pairs negates it.
///
/// The caller must pass correctly paired anchor names; no pairing is
/// inferred.
///
/// # Errors
///
/// Returns [`AssemblyError::MissingAnchor`] if either anchor is absent.
///
/// # Example
///
/// ```
/// use shelf_assembly::offset::relative_offset;
/// use shelf_types::{Part, Point3};
///
/// let panel = Part::new("back_panel")
///     .with_anchor("bottom_left", Point3::new(-40.0, 0.0, 0.0));
/// let stand = Part::new("stand")
///     .with_anchor("bottom_back_panel", Point3::new(0.0, 0.0, -2.0));
///
/// let offset = relative_offset(&panel, "bottom_left", &stand, "bottom_back_panel")?;
/// assert_eq!(offset, shelf_assembly::Vector3::new(-40.0, 0.0, 2.0));
/// # Ok::<(), shelf_assembly::AssemblyError>(())
/// ```
pub fn relative_offset(
    from: &Part,
    from_anchor: &str,
    to: &Part,
    to_anchor: &str,
) -> AssemblyResult<Vector3<f64>> {
    let from_point = anchor_point(from, from_anchor)?;
    let to_point = anchor_point(to, to_anchor)?;
    Ok(from_point - to_point)
}

/// Compute the translation that aligns `to`'s anchor onto a resolved point.
///
/// Same rule as [`relative_offset`], for reference points that have already
/// been extracted from an anchor set (e.g. a selected `console_*` anchor).
///
/// # Errors
///
/// Returns [`AssemblyError::MissingAnchor`] if the anchor is absent.
pub fn relative_offset_to_point(
    point: Point3<f64>,
    to: &Part,
    to_anchor: &str,
) -> AssemblyResult<Vector3<f64>> {
    let to_point = anchor_point(to, to_anchor)?;
    Ok(point - to_point)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn panel() -> Part {
        Part::new("back_panel")
            .with_anchor("bottom_left", Point3::new(-40.0, 0.0, 0.0))
            .with_anchor("bottom_right", Point3::new(40.0, 0.0, 0.0))
    }

    fn stand() -> Part {
        Part::new("stand")
            .with_anchor("bottom_back_panel", Point3::new(0.0, 0.0, -2.0))
            .with_anchor("leg", Point3::new(0.0, -10.0, 0.0))
    }

    fn leg() -> Part {
        Part::new("leg").with_anchor("stand", Point3::new(0.0, 10.0, 0.0))
    }

    #[test]
    fn test_anchor_point() {
        let point = anchor_point(&stand(), "leg").unwrap();
        assert_relative_eq!(point.y, -10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anchor_point_missing() {
        let result = anchor_point(&stand(), "nonexistent");
        assert!(matches!(
            result,
            Err(AssemblyError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_relative_offset() {
        let offset = relative_offset(&panel(), "bottom_left", &stand(), "bottom_back_panel")
            .unwrap();
        assert_relative_eq!(offset, Vector3::new(-40.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_relative_offset_anti_symmetric() {
        let forward = relative_offset(&panel(), "bottom_left", &stand(), "bottom_back_panel")
            .unwrap();
        let backward = relative_offset(&stand(), "bottom_back_panel", &panel(), "bottom_left")
            .unwrap();
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_offset_missing_anchor_fails() {
        let result = relative_offset(&panel(), "bottom_left", &stand(), "nonexistent");
        assert!(matches!(
            result,
            Err(AssemblyError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_chained_offsets_associative() {
        // panel -> stand -> leg, grouped both ways
        let stand_offset = relative_offset(&panel(), "bottom_left", &stand(), "bottom_back_panel")
            .unwrap();
        let leg_step = relative_offset(&stand(), "leg", &leg(), "stand").unwrap();

        let grouped_left = (stand_offset + leg_step) + Vector3::zeros();
        let fused = stand_offset + (leg_step + Vector3::zeros());

        assert_relative_eq!(grouped_left, fused, epsilon = 1e-12);
        assert_relative_eq!(grouped_left, Vector3::new(-40.0, -20.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_relative_offset_to_point() {
        let selected = Point3::new(1.5, 30.0, 4.0);
        let console = Part::new("console").with_anchor("stand", Point3::new(0.0, 2.0, -4.0));

        let offset = relative_offset_to_point(selected, &console, "stand").unwrap();
        assert_relative_eq!(offset, Vector3::new(1.5, 28.0, 8.0), epsilon = 1e-12);
    }
}
