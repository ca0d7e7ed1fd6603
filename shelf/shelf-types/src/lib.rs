//! Core types for anchor-based furniture assembly.
//!
//! This crate provides the foundational types for composing multi-part
//! models from named anchor points:
//!
//! - [`Anchor`] - A labeled point in a part's local coordinate frame
//! - [`AnchorSet`] - A part's named anchor collection
//! - [`Part`] - A geometric asset plus its anchor catalog
//! - [`Placement`] - A part instance's resolved world-space offset
//! - [`PartRole`] - The structural role a placement fills
//!
//! # No Rendering Dependencies
//!
//! This crate knows nothing about scene graphs, materials, or model file
//! formats. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Any renderer that can instance a part at an offset
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! The bundled demo data assumes millimeters.
//!
//! # Coordinate System
//!
//! Anchors are authored in each part's local frame with Y as the vertical
//! axis. Offsets are plain translations; no rotation is applied to anchor
//! points when offsets are composed.
//!
//! # Example
//!
//! ```
//! use shelf_types::{AnchorSet, Part, Point3};
//!
//! let stand = Part::new("stand")
//!     .with_anchor("leg", Point3::new(0.0, -10.0, 0.0))
//!     .with_anchor("console_0", Point3::new(1.5, 12.0, 4.0));
//!
//! assert_eq!(stand.id(), "stand");
//! assert!(stand.anchor("leg").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod anchor;
mod part;
mod placement;
mod role;

pub use anchor::{Anchor, AnchorSet};
pub use part::Part;
pub use placement::Placement;
pub use role::{PartRole, Side};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
