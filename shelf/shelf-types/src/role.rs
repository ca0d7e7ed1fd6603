//! Structural roles and sides for placements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The structural role a placement fills in the assembled unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartRole {
    /// Stacked rear panel.
    BackPanel,

    /// Vertical upright carrying the console anchors.
    Stand,

    /// Floor support under a stand.
    Leg,

    /// Bracket that carries a level shelf.
    Console,

    /// Board spanning the base of the unit.
    BaseBoard,

    /// Horizontal shelf resting on a console pair.
    Level,
}

impl PartRole {
    /// Get a human-readable name for the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BackPanel => "back panel",
            Self::Stand => "stand",
            Self::Leg => "leg",
            Self::Console => "console",
            Self::BaseBoard => "base board",
            Self::Level => "level",
        }
    }
}

/// Which upright a placement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Left upright.
    Left,

    /// Right upright.
    Right,
}

impl Side {
    /// Get a human-readable name for the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(PartRole::BackPanel.as_str(), "back panel");
        assert_eq!(PartRole::Stand.as_str(), "stand");
        assert_eq!(PartRole::Leg.as_str(), "leg");
        assert_eq!(PartRole::Console.as_str(), "console");
        assert_eq!(PartRole::BaseBoard.as_str(), "base board");
        assert_eq!(PartRole::Level.as_str(), "level");
    }

    #[test]
    fn test_side_as_str() {
        assert_eq!(Side::Left.as_str(), "left");
        assert_eq!(Side::Right.as_str(), "right");
    }
}
