//! The anchor catalog: a read-only registry of parts.
//!
//! The catalog is populated once (programmatically or from a JSON file)
//! and then only read. Assembly requires synchronous, fully resolved access
//! to every part it references; asynchronous asset acquisition is the
//! caller's concern and must complete before [`assemble`](crate::assemble)
//! runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use nalgebra::Point3;
use serde::Deserialize;
use shelf_types::Part;
use tracing::{debug, info};

use crate::error::{AssemblyError, AssemblyResult};

/// Read-only registry of parts keyed by ID.
///
/// # Example
///
/// ```
/// use shelf_assembly::Catalog;
/// use shelf_types::{Part, Point3};
///
/// let mut catalog = Catalog::new();
/// catalog.add_part(
///     Part::new("leg").with_anchor("stand", Point3::new(0.0, 10.0, 0.0)),
/// )?;
///
/// let leg = catalog.part("leg")?;
/// assert_eq!(leg.id(), "leg");
/// # Ok::<(), shelf_assembly::AssemblyError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: HashMap<String, Part>,
}

/// Catalog file schema: part ID to anchors, with an optional loader path.
///
/// ```json
/// {
///   "leg": {
///     "path": "models/leg.glb",
///     "anchors": { "stand": [0.0, 10.0, 0.0] }
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
struct RawPart {
    #[serde(default)]
    path: Option<String>,
    anchors: BTreeMap<String, [f64; 3]>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::DuplicatePart`] if a part with the same ID
    /// already exists.
    pub fn add_part(&mut self, part: Part) -> AssemblyResult<()> {
        if self.parts.contains_key(part.id()) {
            return Err(AssemblyError::DuplicatePart {
                id: part.id().to_string(),
            });
        }

        self.parts.insert(part.id().to_string(), part);
        Ok(())
    }

    /// Get a part by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::UnknownPart`] if the ID is not in the catalog.
    pub fn part(&self, id: &str) -> AssemblyResult<&Part> {
        self.parts.get(id).ok_or_else(|| AssemblyError::UnknownPart {
            id: id.to_string(),
        })
    }

    /// Get a part by ID, or `None` if absent.
    #[must_use]
    pub fn get_part(&self, id: &str) -> Option<&Part> {
        self.parts.get(id)
    }

    /// Look up an anchor point on a part.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::UnknownPart`] if the part is absent, or
    /// [`AssemblyError::MissingAnchor`] if the part has no such anchor.
    pub fn anchor(&self, part_id: &str, name: &str) -> AssemblyResult<Point3<f64>> {
        let part = self.part(part_id)?;
        part.anchor(name)
            .copied()
            .ok_or_else(|| AssemblyError::MissingAnchor {
                part_id: part_id.to_string(),
                anchor: name.to_string(),
            })
    }

    /// Check if a part exists.
    #[must_use]
    pub fn contains_part(&self, id: &str) -> bool {
        self.parts.contains_key(id)
    }

    /// Get an iterator over part IDs.
    pub fn part_ids(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Get an iterator over all parts.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Get the number of parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::CatalogParse`] if the JSON does not match
    /// the catalog schema.
    pub fn from_json_str(json: &str) -> AssemblyResult<Self> {
        let raw: BTreeMap<String, RawPart> =
            serde_json::from_str(json).map_err(|e| AssemblyError::CatalogParse {
                message: e.to_string(),
            })?;

        let mut catalog = Self::new();
        for (id, raw_part) in raw {
            let mut part = Part::new(&id);
            if let Some(path) = raw_part.path {
                part = part.with_source_path(path);
            }
            for (name, [x, y, z]) in raw_part.anchors {
                part = part.with_anchor(name, Point3::new(x, y, z));
            }

            debug!(part = %id, anchors = part.anchors().len(), "Loaded catalog part");
            catalog.add_part(part)?;
        }

        info!(parts = catalog.part_count(), "Catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::Io`] if the file cannot be read, or
    /// [`AssemblyError::CatalogParse`] if its content is malformed.
    pub fn from_json_file(path: &Path) -> AssemblyResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| AssemblyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn leg_part() -> Part {
        Part::new("leg").with_anchor("stand", Point3::new(0.0, 10.0, 0.0))
    }

    #[test]
    fn test_catalog_new() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.part_count(), 0);
    }

    #[test]
    fn test_add_and_get_part() {
        let mut catalog = Catalog::new();
        catalog.add_part(leg_part()).unwrap();

        assert_eq!(catalog.part_count(), 1);
        assert!(catalog.contains_part("leg"));
        assert!(catalog.get_part("leg").is_some());
        assert!(catalog.part("leg").is_ok());
    }

    #[test]
    fn test_add_duplicate_part_fails() {
        let mut catalog = Catalog::new();
        catalog.add_part(leg_part()).unwrap();

        let result = catalog.add_part(leg_part());
        assert!(matches!(result, Err(AssemblyError::DuplicatePart { .. })));
    }

    #[test]
    fn test_unknown_part() {
        let catalog = Catalog::new();
        let result = catalog.part("missing");
        assert!(matches!(result, Err(AssemblyError::UnknownPart { .. })));
    }

    #[test]
    fn test_anchor_lookup() {
        let mut catalog = Catalog::new();
        catalog.add_part(leg_part()).unwrap();

        let point = catalog.anchor("leg", "stand").unwrap();
        assert!((point.y - 10.0).abs() < 1e-10);

        let result = catalog.anchor("leg", "missing");
        assert!(matches!(result, Err(AssemblyError::MissingAnchor { .. })));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "leg": {
                "path": "models/leg.glb",
                "anchors": { "stand": [0.0, 10.0, 0.0] }
            },
            "console": {
                "anchors": {
                    "stand": [0.0, 2.0, -4.0],
                    "level": [12.0, 4.0, 0.0]
                }
            }
        }"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.part_count(), 2);

        let leg = catalog.part("leg").unwrap();
        assert_eq!(leg.source_path(), Some("models/leg.glb"));
        assert!((catalog.anchor("console", "level").unwrap().x - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_json_str_returns_exact_authored_points() {
        let json = r#"{ "panel": { "anchors": { "top_left": [-40.5, 40.25, 0.125] } } }"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        let point = catalog.anchor("panel", "top_left").unwrap();
        assert_eq!(point, Point3::new(-40.5, 40.25, 0.125));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = Catalog::from_json_str("not json");
        assert!(matches!(result, Err(AssemblyError::CatalogParse { .. })));

        // Anchors must be 3-tuples
        let result = Catalog::from_json_str(r#"{ "leg": { "anchors": { "stand": [0.0] } } }"#);
        assert!(matches!(result, Err(AssemblyError::CatalogParse { .. })));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = Catalog::from_json_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(AssemblyError::Io { .. })));
    }
}
