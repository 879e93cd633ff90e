// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tilewall Core
//!
//! Data model for vector-tile building features: boundary footprints plus
//! the string-keyed property bags that carry extrusion heights and other
//! per-feature attributes.
//!
//! ## Quick Start
//!
//! ```rust
//! use tilewall_core::{Feature, PropertyValue};
//! use nalgebra::Point2;
//!
//! let feature = Feature::new(
//!     42,
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ],
//! )
//! .with_property("height", PropertyValue::Number(24.0))
//! .with_property("min_height", PropertyValue::Text("3".into()));
//!
//! assert_eq!(feature.properties.number("height").unwrap(), Some(24.0));
//! assert_eq!(feature.properties.number("min_height").unwrap(), Some(3.0));
//! ```

pub mod error;
pub mod feature;
pub mod properties;

// Re-export nalgebra point type used by the feature model
pub use nalgebra::Point2;

pub use error::{Error, Result};
pub use feature::Feature;
pub use properties::{PropertyBag, PropertyValue};
