// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion height resolution
//!
//! Extracts the (min, max) extrusion heights for a feature from its
//! property bag according to the configured strategy. Values are unscaled;
//! the entry point applies the extrusion factor and tile scale.

use crate::error::Result;
use crate::options::{ExtrusionOptions, ExtrusionStrategy};
use tilewall_core::Feature;
use tracing::warn;

/// Property key tile sources use for the base of a raised footprint
const MIN_HEIGHT_KEY: &str = "min_height";

/// Resolve (min_height, max_height) for a feature.
///
/// Missing properties default to 0 and are not an error; a present but
/// non-numeric value is fatal for this feature. `RangeHeight` corrects
/// inverted bounds in place, which is the one mutation this module makes.
pub fn resolve_extrusion_height(
    feature: &Feature,
    options: &mut ExtrusionOptions,
) -> Result<(f64, f64)> {
    let mut min_height = 0.0;
    let mut max_height = 0.0;

    match options.strategy {
        ExtrusionStrategy::None => {}
        ExtrusionStrategy::PropertyHeight
        | ExtrusionStrategy::MinHeight
        | ExtrusionStrategy::MaxHeight => {
            if let Some(height) = feature.properties.number(&options.property_name)? {
                max_height = height;
                if let Some(base) = feature.properties.number(MIN_HEIGHT_KEY)? {
                    min_height = base;
                }
            }
        }
        ExtrusionStrategy::RangeHeight => {
            if feature.properties.contains(&options.property_name) {
                if options.minimum_height > options.maximum_height {
                    warn!(
                        minimum = options.minimum_height,
                        maximum = options.maximum_height,
                        "maximum height less than minimum height, swapping values for extrusion"
                    );
                    std::mem::swap(&mut options.minimum_height, &mut options.maximum_height);
                }
                let height = feature
                    .properties
                    .number(&options.property_name)?
                    .unwrap_or(0.0);
                max_height = height.max(options.minimum_height).min(options.maximum_height);
                if let Some(base) = feature.properties.number(MIN_HEIGHT_KEY)? {
                    min_height = base.min(options.maximum_height);
                }
            }
        }
        ExtrusionStrategy::AbsoluteHeight => {
            max_height = options.maximum_height;
        }
    }

    Ok((min_height, max_height))
}
