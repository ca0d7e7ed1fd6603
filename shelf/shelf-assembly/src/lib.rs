//! Anchor-based spatial assembly for modular shelving units.
//!
//! This crate assembles a multi-part furniture model from individually
//! authored sub-models (back panel, stand, leg, console, base board, level)
//! by aligning named anchor points instead of hard-coding transforms.
//!
//! The crate is organized around these components:
//!
//! - [`Catalog`] - Read-only registry of parts and their anchor sets
//! - [`offset`] - Pure functions computing relative placement vectors
//! - [`spacing`] - Evenly spaced selection of repeated anchor candidates
//! - [`assemble`] - The composer producing an ordered [`AssemblyPlan`]
//!
//! Assembly is deterministic, synchronous, and stateless per invocation:
//! the same catalog and configuration always produce bit-identical offsets.
//! Rendering, model decoding, and user interaction are external concerns;
//! the plan is a static set of `(part, offset)` pairs for a renderer to
//! instance.
//!
//! # Quick Start
//!
//! ```
//! use shelf_assembly::{assemble, Catalog, ShelfConfig};
//! use shelf_types::{Part, Point3};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_part(
//!     Part::new("back_panel")
//!         .with_anchor("top_left", Point3::new(-40.0, 40.0, 0.0))
//!         .with_anchor("bottom_left", Point3::new(-40.0, 0.0, 0.0))
//!         .with_anchor("bottom_right", Point3::new(40.0, 0.0, 0.0)),
//! )?;
//! catalog.add_part(
//!     Part::new("stand")
//!         .with_anchor("bottom_back_panel", Point3::new(0.0, 0.0, -2.0))
//!         .with_anchor("bottom_base_board", Point3::new(0.0, 2.0, 4.0))
//!         .with_anchor("leg", Point3::new(0.0, -10.0, 0.0))
//!         .with_anchor("console_0", Point3::new(1.5, 12.0, 4.0))
//!         .with_anchor("console_1", Point3::new(1.5, 30.0, 4.0)),
//! )?;
//! catalog.add_part(Part::new("leg").with_anchor("stand", Point3::new(0.0, 10.0, 0.0)))?;
//! catalog.add_part(
//!     Part::new("console")
//!         .with_anchor("stand", Point3::new(0.0, 2.0, -4.0))
//!         .with_anchor("level", Point3::new(12.0, 4.0, 0.0)),
//! )?;
//! catalog.add_part(
//!     Part::new("base_board").with_anchor("bottom_left", Point3::new(-38.0, 0.0, 2.0)),
//! )?;
//! catalog.add_part(
//!     Part::new("level").with_anchor("console_left", Point3::new(-38.0, -2.0, 0.0)),
//! )?;
//!
//! let config = ShelfConfig::new().with_panel_count(3).with_level_count(2);
//! let plan = assemble(&catalog, &config)?;
//!
//! assert_eq!(plan.len(), 3 + 2 + 2 + 2 + 2 + 1 + 2);
//! # Ok::<(), shelf_assembly::AssemblyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod catalog;
mod compose;
mod error;
pub mod offset;
mod plan;
pub mod spacing;
mod validation;

pub use catalog::Catalog;
pub use compose::{assemble, assemble_with_roster, PartRoster, ShelfConfig};
pub use error::{AssemblyError, AssemblyResult};
pub use plan::AssemblyPlan;
pub use validation::{validate_catalog, CatalogValidation};

// Re-export commonly used types for convenience
pub use shelf_types::{Anchor, AnchorSet, Part, PartRole, Placement, Point3, Side, Vector3};
