//! Assembly plans: the ordered output of the composer.

use shelf_types::{PartRole, Placement};

/// The full ordered set of placements for one generated structure.
///
/// A plan is self-contained: every placement carries its own world-space
/// offset, and nothing references other placements. Plans are consumed by
/// a renderer and regenerated from scratch when a parameter (such as the
/// level count) changes.
///
/// Placement order is stable — panels, legs, stands, left consoles, right
/// consoles, base board, levels — so identical inputs produce identical
/// plans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyPlan {
    placements: Vec<Placement>,
    color_override: Option<String>,
}

impl AssemblyPlan {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub(crate) fn set_color_override(&mut self, color: Option<String>) {
        self.color_override = color;
    }

    /// Get all placements in stable order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Get the color the renderer should apply to paintable parts, if any.
    ///
    /// The core carries this value opaquely; interpreting it is the
    /// renderer's concern.
    #[must_use]
    pub fn color_override(&self) -> Option<&str> {
        self.color_override.as_deref()
    }

    /// Get the number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if the plan is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate over placements filling a given role, in plan order.
    pub fn placements_for_role(&self, role: PartRole) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.role() == role)
    }

    /// Count placements filling a given role.
    #[must_use]
    pub fn role_count(&self, role: PartRole) -> usize {
        self.placements_for_role(role).count()
    }

    /// Get `(part_id, quantity)` pairs, sorted by part ID.
    #[must_use]
    pub fn part_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for placement in &self.placements {
            match counts
                .iter_mut()
                .find(|(id, _)| id.as_str() == placement.part_id())
            {
                Some((_, quantity)) => *quantity += 1,
                None => counts.push((placement.part_id().to_string(), 1)),
            }
        }
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        counts
    }

    /// Get a one-line summary of the plan.
    #[must_use]
    pub fn summary(&self) -> String {
        const ROLES: [PartRole; 6] = [
            PartRole::BackPanel,
            PartRole::Leg,
            PartRole::Stand,
            PartRole::Console,
            PartRole::BaseBoard,
            PartRole::Level,
        ];

        let counts: Vec<String> = ROLES
            .iter()
            .map(|role| format!("{} {}(s)", self.role_count(*role), role.as_str()))
            .collect();

        format!("{} placement(s): {}", self.len(), counts.join(", "))
    }
}
