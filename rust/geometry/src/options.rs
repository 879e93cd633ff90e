// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion configuration

/// Which parts of the building get geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtrusionGeometryType {
    /// Lift the roof polygon only, no walls
    RoofOnly,
    /// Walls only, roof vertices stay where the footprint put them
    SideOnly,
    /// Roof and walls
    #[default]
    RoofAndSide,
}

/// How the extrusion height is derived for a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtrusionStrategy {
    /// No extrusion
    #[default]
    None,
    /// Height read from the configured feature property
    PropertyHeight,
    /// Property height, roof flattened to the footprint's lowest vertex
    MinHeight,
    /// Property height, roof flattened to the footprint's highest vertex
    MaxHeight,
    /// Property height clamped into the configured bounds
    RangeHeight,
    /// Fixed height from the configuration, feature properties ignored
    AbsoluteHeight,
}

/// Extrusion configuration owned by the tile pipeline.
///
/// Read-only during processing, with one documented exception: the
/// `RangeHeight` strategy swaps inverted min/max bounds in place.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtrusionOptions {
    pub geometry_type: ExtrusionGeometryType,
    pub strategy: ExtrusionStrategy,
    /// Property bag key the height is read from
    pub property_name: String,
    /// Lower height bound (`RangeHeight`)
    pub minimum_height: f64,
    /// Upper height bound (`RangeHeight`, `AbsoluteHeight`)
    pub maximum_height: f64,
    /// Global extrusion scale factor
    pub scale_factor: f64,
}

impl Default for ExtrusionOptions {
    fn default() -> Self {
        Self {
            geometry_type: ExtrusionGeometryType::default(),
            strategy: ExtrusionStrategy::default(),
            property_name: "height".to_string(),
            minimum_height: 0.0,
            maximum_height: 0.0,
            scale_factor: 1.0,
        }
    }
}
