// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tilewall Geometry
//!
//! Extruded building-wall geometry for a 3D map-tile renderer: given a
//! footprint feature and a height, synthesizes a textured facade mesh
//! (first floor, repeating mid floors, top floor) with atlas UV mapping.
//!
//! ## Overview
//!
//! - **Footprint cap**: earcutr-triangulated roof polygon seeding the mesh
//!   buffer with vertices and boundary edges
//! - **Height resolution**: per-strategy extraction of min/max extrusion
//!   heights from the feature's property bag
//! - **Roof extrusion**: in-place lift of the roof vertices
//! - **Edge segmentation**: subdivision of boundary edges into wall columns
//! - **Facade bands**: per-column first/mid/top floor quads with
//!   aspect-ratio-aware atlas UVs and a narrow-wall fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use nalgebra::Point2;
//! use tilewall_core::Feature;
//! use tilewall_geometry::{
//!     cap_footprint, AtlasRect, ExtrusionOptions, ExtrusionStrategy, FacadeAtlas,
//!     FacadeEntry, MeshData, TexturedWallModifier,
//! };
//!
//! let feature = Feature::new(
//!     1,
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(12.0, 0.0),
//!         Point2::new(12.0, 12.0),
//!         Point2::new(0.0, 12.0),
//!     ],
//! )
//! .with_property("height", 24.0);
//!
//! let atlas = FacadeAtlas::new(vec![FacadeEntry::new(AtlasRect::new(0.0, 0.0, 0.5, 0.5))]);
//! let options = ExtrusionOptions {
//!     strategy: ExtrusionStrategy::PropertyHeight,
//!     ..Default::default()
//! };
//!
//! let mut md = MeshData::new();
//! cap_footprint(&feature, &mut md).unwrap();
//! let mut modifier = TexturedWallModifier::new(options, atlas);
//! modifier.apply(&feature, &mut md, 1.0).unwrap();
//! assert!(md.triangle_count() > 0);
//! ```

pub mod atlas;
pub mod error;
pub mod footprint;
pub mod height;
pub mod mesh;
pub mod modifier;
pub mod options;
pub mod pipeline;
pub mod roof;
pub mod segment;
pub mod walls;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use atlas::{AtlasRect, FacadeAtlas, FacadeEntry};
pub use error::{Error, Result};
pub use footprint::cap_footprint;
pub use height::resolve_extrusion_height;
pub use mesh::MeshData;
pub use modifier::TexturedWallModifier;
pub use options::{ExtrusionGeometryType, ExtrusionOptions, ExtrusionStrategy};
pub use pipeline::build_tile_walls;
pub use roof::extrude_roof;
pub use segment::segment_edges;
