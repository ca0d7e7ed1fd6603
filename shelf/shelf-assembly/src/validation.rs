//! Preflight catalog validation.
//!
//! The composer fails fast on the first missing part or anchor; this module
//! checks a catalog against a roster up front and reports *every* authoring
//! problem at once, which is more useful while anchor data is being edited.

use shelf_types::Part;

use crate::catalog::Catalog;
use crate::compose::PartRoster;

/// Anchors each roster part must carry for the composer to succeed.
const PANEL_ANCHORS: [&str; 3] = ["top_left", "bottom_left", "bottom_right"];
const STAND_ANCHORS: [&str; 3] = ["bottom_back_panel", "leg", "bottom_base_board"];
const LEG_ANCHORS: [&str; 1] = ["stand"];
const CONSOLE_ANCHORS: [&str; 2] = ["stand", "level"];
const BASE_BOARD_ANCHORS: [&str; 1] = ["bottom_left"];
const LEVEL_ANCHORS: [&str; 1] = ["console_left"];

const CONSOLE_PREFIX: &str = "console_";

/// Catalog validation result.
///
/// Contains every missing part and anchor found, not just the first.
#[derive(Debug, Clone, Default)]
pub struct CatalogValidation {
    /// Roster part IDs absent from the catalog.
    pub missing_parts: Vec<String>,

    /// Required anchors absent from a present part (`part_id`, `anchor`).
    pub missing_anchors: Vec<(String, String)>,

    /// Stand part IDs carrying no `console_*` anchors at all.
    pub stands_without_consoles: Vec<String>,
}

impl CatalogValidation {
    /// Create a new empty validation result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the catalog satisfies the roster (no issues found).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_parts.is_empty()
            && self.missing_anchors.is_empty()
            && self.stands_without_consoles.is_empty()
    }

    /// Get the total number of issues found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.missing_parts.len()
            + self.missing_anchors.len()
            + self.stands_without_consoles.len()
    }

    /// Get a summary of validation issues as a string.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Catalog is valid".to_string();
        }

        let mut issues = Vec::new();

        if !self.missing_parts.is_empty() {
            issues.push(format!("{} missing part(s)", self.missing_parts.len()));
        }

        if !self.missing_anchors.is_empty() {
            issues.push(format!("{} missing anchor(s)", self.missing_anchors.len()));
        }

        if !self.stands_without_consoles.is_empty() {
            issues.push(format!(
                "{} stand(s) without console anchors",
                self.stands_without_consoles.len()
            ));
        }

        format!("Validation failed: {}", issues.join(", "))
    }
}

/// Validate that a catalog can satisfy a roster.
///
/// Checks that each roster part exists, that it carries the anchors the
/// composer references, and that the stand exposes at least one
/// `console_*` seat. Unlike the composer, this reports all problems in one
/// pass instead of aborting on the first.
#[must_use]
pub fn validate_catalog(catalog: &Catalog, roster: &PartRoster) -> CatalogValidation {
    let mut result = CatalogValidation::new();

    check_part(catalog, roster.back_panel(), &PANEL_ANCHORS, &mut result);
    check_part(catalog, roster.leg(), &LEG_ANCHORS, &mut result);
    check_part(catalog, roster.console(), &CONSOLE_ANCHORS, &mut result);
    check_part(catalog, roster.base_board(), &BASE_BOARD_ANCHORS, &mut result);
    check_part(catalog, roster.level(), &LEVEL_ANCHORS, &mut result);

    if let Some(stand) = check_part(catalog, roster.stand(), &STAND_ANCHORS, &mut result) {
        let has_consoles = stand
            .anchors()
            .iter()
            .any(|(name, _)| name.starts_with(CONSOLE_PREFIX));
        if !has_consoles {
            result.stands_without_consoles.push(stand.id().to_string());
        }
    }

    result
}

/// Record the part's missing anchors, or the part itself if absent.
fn check_part<'a>(
    catalog: &'a Catalog,
    part_id: &str,
    required: &[&str],
    result: &mut CatalogValidation,
) -> Option<&'a Part> {
    let Some(part) = catalog.get_part(part_id) else {
        result.missing_parts.push(part_id.to_string());
        return None;
    };

    for anchor in required {
        if !part.anchors().contains(anchor) {
            result
                .missing_anchors
                .push((part_id.to_string(), (*anchor).to_string()));
        }
    }

    Some(part)
}
