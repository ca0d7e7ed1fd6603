//! Named anchor points and anchor collections.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labeled point in a part's local coordinate frame.
///
/// Anchors are authored on a part and used to align it with other parts:
/// two parts are joined by translating one until a pair of anchors coincide.
///
/// # Example
///
/// ```
/// use shelf_types::{Anchor, Point3};
///
/// let anchor = Anchor::new("bottom_left", Point3::new(-40.0, 0.0, 0.0));
/// assert_eq!(anchor.name, "bottom_left");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// Anchor label, unique within its part.
    pub name: String,

    /// Position in the part's local frame.
    pub point: Point3<f64>,
}

impl Anchor {
    /// Create a new anchor.
    #[must_use]
    pub fn new(name: impl Into<String>, point: Point3<f64>) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}

/// A part's named anchor collection.
///
/// Anchor names are unique within a set; inserting an existing name
/// replaces its point.
///
/// # Example
///
/// ```
/// use shelf_types::{AnchorSet, Point3};
///
/// let mut anchors = AnchorSet::new();
/// anchors.insert("top_left", Point3::new(-40.0, 40.0, 0.0));
/// anchors.insert("bottom_left", Point3::new(-40.0, 0.0, 0.0));
///
/// assert_eq!(anchors.len(), 2);
/// assert!(anchors.contains("top_left"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorSet {
    anchors: HashMap<String, Point3<f64>>,
}

impl AnchorSet {
    /// Create an empty anchor set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an anchor, replacing any previous point under the same name.
    ///
    /// Returns the replaced point, if any.
    pub fn insert(&mut self, name: impl Into<String>, point: Point3<f64>) -> Option<Point3<f64>> {
        self.anchors.insert(name.into(), point)
    }

    /// Add an anchor (builder pattern).
    #[must_use]
    pub fn with_anchor(mut self, name: impl Into<String>, point: Point3<f64>) -> Self {
        self.anchors.insert(name.into(), point);
        self
    }

    /// Look up an anchor point by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Point3<f64>> {
        self.anchors.get(name)
    }

    /// Check whether an anchor exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.anchors.contains_key(name)
    }

    /// Get the number of anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Iterate over `(name, point)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.anchors.iter().map(|(name, point)| (name.as_str(), point))
    }

    /// Get all anchor names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.anchors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get all anchors whose name starts with `prefix`, sorted by name.
    ///
    /// # Example
    ///
    /// ```
    /// use shelf_types::{AnchorSet, Point3};
    ///
    /// let anchors = AnchorSet::new()
    ///     .with_anchor("console_0", Point3::new(0.0, 12.0, 0.0))
    ///     .with_anchor("console_1", Point3::new(0.0, 30.0, 0.0))
    ///     .with_anchor("leg", Point3::new(0.0, -10.0, 0.0));
    ///
    /// let consoles = anchors.with_prefix("console_");
    /// assert_eq!(consoles.len(), 2);
    /// ```
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Vec<Anchor> {
        let mut matches: Vec<Anchor> = self
            .anchors
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, point)| Anchor::new(name.clone(), *point))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }
}
