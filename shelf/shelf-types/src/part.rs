//! Parts: geometric assets with anchor catalogs.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorSet;

/// A discrete 3D asset with its own local coordinate frame and anchor set.
///
/// A part describes *where it can attach*, not its geometry: mesh loading
/// and rendering are external concerns, referenced only through
/// [`source_path`](Part::source_path). Parts are immutable once the catalog
/// is populated.
///
/// # Example
///
/// ```
/// use shelf_types::{Part, Point3};
///
/// let panel = Part::new("back_panel")
///     .with_source_path("models/back_panel.glb")
///     .with_anchor("top_left", Point3::new(-40.0, 40.0, 0.0))
///     .with_anchor("bottom_left", Point3::new(-40.0, 0.0, 0.0));
///
/// assert_eq!(panel.id(), "back_panel");
/// assert_eq!(panel.anchors().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Unique identifier for this part.
    id: String,

    /// Identifier the external model loader resolves to geometry.
    source_path: Option<String>,

    /// Named anchor points in the part's local frame.
    anchors: AnchorSet,
}

impl Part {
    /// Create a new part with an empty anchor set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_path: None,
            anchors: AnchorSet::new(),
        }
    }

    /// Get the part ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the loader path/identifier, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Get the anchor set.
    #[must_use]
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Look up an anchor point by name.
    #[must_use]
    pub fn anchor(&self, name: &str) -> Option<&Point3<f64>> {
        self.anchors.get(name)
    }

    /// Set the loader path (builder pattern).
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Add an anchor (builder pattern).
    #[must_use]
    pub fn with_anchor(mut self, name: impl Into<String>, point: Point3<f64>) -> Self {
        self.anchors.insert(name, point);
        self
    }

    /// Replace the whole anchor set (builder pattern).
    #[must_use]
    pub fn with_anchors(mut self, anchors: AnchorSet) -> Self {
        self.anchors = anchors;
        self
    }
}
