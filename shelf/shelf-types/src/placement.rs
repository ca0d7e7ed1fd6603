//! Placements: resolved part instances in world space.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::{PartRole, Side};

/// A part instance's resolved position in world space.
///
/// Placements are value objects: created fresh per assembly run, never
/// mutated, consumed by a renderer and regenerated on parameter change.
///
/// # Example
///
/// ```
/// use shelf_types::{PartRole, Placement, Side, Vector3};
///
/// let placement = Placement::new(PartRole::Stand, "stand", Vector3::new(-40.0, 0.0, 2.0))
///     .with_side(Side::Left);
///
/// assert_eq!(placement.part_id(), "stand");
/// assert_eq!(placement.side(), Some(Side::Left));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Structural role this instance fills.
    role: PartRole,

    /// Catalog ID of the placed part.
    part_id: String,

    /// Which upright this instance belongs to, where meaningful.
    side: Option<Side>,

    /// World-space translation applied to the part's local frame.
    offset: Vector3<f64>,

    /// Euler rotation in radians, if any.
    rotation: Option<Vector3<f64>>,
}

impl Placement {
    /// Create a new placement with no rotation.
    #[must_use]
    pub fn new(role: PartRole, part_id: impl Into<String>, offset: Vector3<f64>) -> Self {
        Self {
            role,
            part_id: part_id.into(),
            side: None,
            offset,
            rotation: None,
        }
    }

    /// Get the structural role.
    #[must_use]
    pub const fn role(&self) -> PartRole {
        self.role
    }

    /// Get the placed part's catalog ID.
    #[must_use]
    pub fn part_id(&self) -> &str {
        &self.part_id
    }

    /// Get the side, if this placement belongs to one upright.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        self.side
    }

    /// Get the world-space offset.
    #[must_use]
    pub const fn offset(&self) -> Vector3<f64> {
        self.offset
    }

    /// Get the rotation, if any.
    #[must_use]
    pub const fn rotation(&self) -> Option<Vector3<f64>> {
        self.rotation
    }

    /// Set the side (builder pattern).
    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Set an Euler rotation in radians (builder pattern).
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Vector3<f64>) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Map a point from the part's local frame into world space.
    #[must_use]
    pub fn world_point(&self, local: &Point3<f64>) -> Point3<f64> {
        local + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placement_new() {
        let placement = Placement::new(PartRole::Leg, "leg", Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(placement.role(), PartRole::Leg);
        assert_eq!(placement.part_id(), "leg");
        assert!(placement.side().is_none());
        assert!(placement.rotation().is_none());
        assert_relative_eq!(placement.offset().y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_placement_builder() {
        let placement = Placement::new(PartRole::Console, "console", Vector3::zeros())
            .with_side(Side::Right)
            .with_rotation(Vector3::new(0.0, std::f64::consts::PI, 0.0));

        assert_eq!(placement.side(), Some(Side::Right));
        assert!(placement.rotation().is_some());
    }

    #[test]
    fn test_world_point() {
        let placement = Placement::new(PartRole::Stand, "stand", Vector3::new(10.0, 0.0, 0.0));
        let world = placement.world_point(&Point3::new(1.0, 2.0, 3.0));

        assert_relative_eq!(world, Point3::new(11.0, 2.0, 3.0), epsilon = 1e-12);
    }
}
