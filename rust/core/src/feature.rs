// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint features
//!
//! A feature is one building footprint decoded from a vector tile: the
//! ordered boundary points in tile-local coordinates, a stable id, and the
//! property bag carrying height attributes.

use crate::properties::{PropertyBag, PropertyValue};
use nalgebra::Point2;

/// One building footprint from a vector tile
#[derive(Debug, Clone, Default)]
pub struct Feature {
    /// Stable feature id from the tile source
    pub id: u64,
    /// Ordered boundary points, tile-local XY
    pub points: Vec<Point2<f64>>,
    /// String-keyed feature properties
    pub properties: PropertyBag,
}

impl Feature {
    /// Create a feature from its id and boundary points
    pub fn new(id: u64, points: Vec<Point2<f64>>) -> Self {
        Self {
            id,
            points,
            properties: PropertyBag::new(),
        }
    }

    /// Builder-style property insertion
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Number of boundary points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_builder() {
        let feature = Feature::new(7, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)])
            .with_property("height", 12.0);
        assert_eq!(feature.id, 7);
        assert_eq!(feature.point_count(), 2);
        assert_eq!(feature.properties.number("height").unwrap(), Some(12.0));
    }
}
