//! The assembly composer: the fixed pipeline producing a plan.
//!
//! The composer orchestrates the offset resolver and the repetition
//! planner across all part roles. Placement math follows a directed
//! dependency chain — consoles depend on stand offsets, stands on panel
//! anchors — resolved in one fixed order, and any missing part or anchor
//! aborts the whole run before a partial plan can escape.

use nalgebra::Vector3;
use shelf_types::{PartRole, Placement, Side};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{AssemblyError, AssemblyResult};
use crate::offset::{anchor_point, relative_offset, relative_offset_to_point};
use crate::plan::AssemblyPlan;
use crate::spacing::{candidates_with_prefix, select_evenly_spaced};

/// Anchor naming convention shared by all shelving parts.
mod anchors {
    /// Panel top, defines the stacking step.
    pub const PANEL_TOP_LEFT: &str = "top_left";
    pub const PANEL_BOTTOM_LEFT: &str = "bottom_left";
    pub const PANEL_BOTTOM_RIGHT: &str = "bottom_right";

    pub const STAND_BACK_PANEL: &str = "bottom_back_panel";
    pub const STAND_LEG: &str = "leg";
    pub const STAND_BASE_BOARD: &str = "bottom_base_board";
    /// Prefix of the stand's console seat anchors.
    pub const CONSOLE_PREFIX: &str = "console_";

    pub const LEG_STAND: &str = "stand";
    pub const CONSOLE_STAND: &str = "stand";
    pub const CONSOLE_LEVEL: &str = "level";
    pub const BASE_BOARD_BOTTOM_LEFT: &str = "bottom_left";
    pub const LEVEL_CONSOLE_LEFT: &str = "console_left";
}

/// Catalog IDs of the six parts the composer places.
///
/// The defaults match the conventional part names; override them to
/// assemble from a catalog that names its assets differently.
///
/// # Example
///
/// ```
/// use shelf_assembly::PartRoster;
///
/// let roster = PartRoster::new().with_stand("stand_tall");
/// assert_eq!(roster.stand(), "stand_tall");
/// assert_eq!(roster.leg(), "leg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRoster {
    back_panel: String,
    stand: String,
    leg: String,
    console: String,
    base_board: String,
    level: String,
}

impl PartRoster {
    /// Create a roster with the conventional part IDs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            back_panel: "back_panel".to_string(),
            stand: "stand".to_string(),
            leg: "leg".to_string(),
            console: "console".to_string(),
            base_board: "base_board".to_string(),
            level: "level".to_string(),
        }
    }

    /// Get the back panel part ID.
    #[must_use]
    pub fn back_panel(&self) -> &str {
        &self.back_panel
    }

    /// Get the stand part ID.
    #[must_use]
    pub fn stand(&self) -> &str {
        &self.stand
    }

    /// Get the leg part ID.
    #[must_use]
    pub fn leg(&self) -> &str {
        &self.leg
    }

    /// Get the console part ID.
    #[must_use]
    pub fn console(&self) -> &str {
        &self.console
    }

    /// Get the base board part ID.
    #[must_use]
    pub fn base_board(&self) -> &str {
        &self.base_board
    }

    /// Get the level part ID.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Set the back panel part ID (builder pattern).
    #[must_use]
    pub fn with_back_panel(mut self, id: impl Into<String>) -> Self {
        self.back_panel = id.into();
        self
    }

    /// Set the stand part ID (builder pattern).
    #[must_use]
    pub fn with_stand(mut self, id: impl Into<String>) -> Self {
        self.stand = id.into();
        self
    }

    /// Set the leg part ID (builder pattern).
    #[must_use]
    pub fn with_leg(mut self, id: impl Into<String>) -> Self {
        self.leg = id.into();
        self
    }

    /// Set the console part ID (builder pattern).
    #[must_use]
    pub fn with_console(mut self, id: impl Into<String>) -> Self {
        self.console = id.into();
        self
    }

    /// Set the base board part ID (builder pattern).
    #[must_use]
    pub fn with_base_board(mut self, id: impl Into<String>) -> Self {
        self.base_board = id.into();
        self
    }

    /// Set the level part ID (builder pattern).
    #[must_use]
    pub fn with_level(mut self, id: impl Into<String>) -> Self {
        self.level = id.into();
        self
    }
}

impl Default for PartRoster {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for one assembly run.
///
/// Counts are `usize`, so negative repetition counts are rejected at the
/// type level; a count the candidate anchors cannot satisfy fails with
/// [`AssemblyError::InvalidCount`] when the composer runs.
///
/// # Example
///
/// ```
/// use shelf_assembly::ShelfConfig;
///
/// let config = ShelfConfig::new()
///     .with_level_count(3)
///     .with_color("white");
///
/// assert_eq!(config.level_count(), 3);
/// assert_eq!(config.panel_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Number of level shelves (and console pairs carrying them).
    level_count: usize,
    /// Number of stacked back panels.
    panel_count: usize,
    /// Color the renderer should apply, passed through opaquely.
    color_override: Option<String>,
}

impl ShelfConfig {
    /// Create a configuration with the default counts (5 panels, 7 levels).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level_count: 7,
            panel_count: 5,
            color_override: None,
        }
    }

    /// Set the number of levels (builder pattern).
    #[must_use]
    pub const fn with_level_count(mut self, count: usize) -> Self {
        self.level_count = count;
        self
    }

    /// Set the number of stacked panels (builder pattern).
    #[must_use]
    pub const fn with_panel_count(mut self, count: usize) -> Self {
        self.panel_count = count;
        self
    }

    /// Set the renderer color override (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color_override = Some(color.into());
        self
    }

    /// Get the level count.
    #[must_use]
    pub const fn level_count(&self) -> usize {
        self.level_count
    }

    /// Get the panel count.
    #[must_use]
    pub const fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Get the color override, if any.
    #[must_use]
    pub fn color_override(&self) -> Option<&str> {
        self.color_override.as_deref()
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a shelving unit using the conventional part IDs.
///
/// Equivalent to [`assemble_with_roster`] with [`PartRoster::default`].
///
/// # Errors
///
/// See [`assemble_with_roster`].
pub fn assemble(catalog: &Catalog, config: &ShelfConfig) -> AssemblyResult<AssemblyPlan> {
    assemble_with_roster(catalog, &PartRoster::default(), config)
}

/// Assemble a shelving unit from the given catalog, roster, and config.
///
/// The pipeline is fixed: stacked panels, then stands aligned to the
/// bottom panel corners, legs chained below the stands, evenly spaced
/// console pairs, the base board, and one level shelf per console pair.
/// The returned plan lists placements in that stable order.
///
/// # Errors
///
/// - [`AssemblyError::UnknownPart`] if a roster ID is absent from the
///   catalog.
/// - [`AssemblyError::MissingAnchor`] if any part lacks an anchor the
///   pipeline references. The whole run aborts; no partial plan is
///   returned.
/// - [`AssemblyError::InvalidCount`] if the level count exceeds the
///   stand's console anchor candidates.
pub fn assemble_with_roster(
    catalog: &Catalog,
    roster: &PartRoster,
    config: &ShelfConfig,
) -> AssemblyResult<AssemblyPlan> {
    let panel = catalog.part(roster.back_panel())?;
    let stand = catalog.part(roster.stand())?;
    let leg = catalog.part(roster.leg())?;
    let console = catalog.part(roster.console())?;
    let base_board = catalog.part(roster.base_board())?;
    let level = catalog.part(roster.level())?;

    // Console candidates are checked before any offset is computed so a
    // rejected count cannot produce a partial plan.
    let candidates = candidates_with_prefix(stand, anchors::CONSOLE_PREFIX);
    if config.level_count() > candidates.len() {
        return Err(AssemblyError::InvalidCount {
            requested: config.level_count(),
            available: candidates.len(),
        });
    }

    // Panels stack without gaps using their own vertical extent as the step.
    let panel_height = anchor_point(panel, anchors::PANEL_TOP_LEFT)?.y;
    let mut panel_offsets: Vec<Vector3<f64>> = Vec::with_capacity(config.panel_count());
    for _ in 0..config.panel_count() {
        let offset = match panel_offsets.last() {
            Some(previous) => previous + Vector3::new(0.0, panel_height, 0.0),
            None => Vector3::zeros(),
        };
        panel_offsets.push(offset);
    }
    debug!(panels = panel_offsets.len(), panel_height, "Stacked panels");

    let left_stand = relative_offset(
        panel,
        anchors::PANEL_BOTTOM_LEFT,
        stand,
        anchors::STAND_BACK_PANEL,
    )?;
    let right_stand = relative_offset(
        panel,
        anchors::PANEL_BOTTOM_RIGHT,
        stand,
        anchors::STAND_BACK_PANEL,
    )?;
    debug!(?left_stand, ?right_stand, "Placed stands");

    let leg_step = relative_offset(stand, anchors::STAND_LEG, leg, anchors::LEG_STAND)?;
    let left_leg = left_stand + leg_step;
    let right_leg = right_stand + leg_step;

    let selected = select_evenly_spaced(&candidates, config.level_count());
    let mut left_consoles: Vec<Vector3<f64>> = Vec::with_capacity(selected.len());
    let mut right_consoles: Vec<Vector3<f64>> = Vec::with_capacity(selected.len());
    for anchor in &selected {
        let seat_step = relative_offset_to_point(anchor.point, console, anchors::CONSOLE_STAND)?;
        left_consoles.push(left_stand + seat_step);
        right_consoles.push(right_stand + seat_step);
    }
    debug!(
        consoles = selected.len(),
        candidates = candidates.len(),
        "Selected console seats"
    );

    let base_board_offset = right_stand
        + relative_offset(
            stand,
            anchors::STAND_BASE_BOARD,
            base_board,
            anchors::BASE_BOARD_BOTTOM_LEFT,
        )?;

    let level_step = relative_offset(
        console,
        anchors::CONSOLE_LEVEL,
        level,
        anchors::LEVEL_CONSOLE_LEFT,
    )?;
    let level_offsets: Vec<Vector3<f64>> =
        left_consoles.iter().map(|c| c + level_step).collect();

    // Emit placements in the stable output order.
    let mut plan = AssemblyPlan::new();
    plan.set_color_override(config.color_override().map(String::from));

    for offset in panel_offsets {
        plan.push(Placement::new(PartRole::BackPanel, panel.id(), offset));
    }
    plan.push(Placement::new(PartRole::Leg, leg.id(), left_leg).with_side(Side::Left));
    plan.push(Placement::new(PartRole::Leg, leg.id(), right_leg).with_side(Side::Right));
    plan.push(Placement::new(PartRole::Stand, stand.id(), left_stand).with_side(Side::Left));
    plan.push(Placement::new(PartRole::Stand, stand.id(), right_stand).with_side(Side::Right));
    for offset in left_consoles {
        plan.push(Placement::new(PartRole::Console, console.id(), offset).with_side(Side::Left));
    }
    for offset in right_consoles {
        plan.push(Placement::new(PartRole::Console, console.id(), offset).with_side(Side::Right));
    }
    plan.push(Placement::new(
        PartRole::BaseBoard,
        base_board.id(),
        base_board_offset,
    ));
    for offset in level_offsets {
        plan.push(Placement::new(PartRole::Level, level.id(), offset));
    }

    info!(
        placements = plan.len(),
        levels = config.level_count(),
        panels = config.panel_count(),
        "Assembled shelving plan"
    );
    Ok(plan)
}
