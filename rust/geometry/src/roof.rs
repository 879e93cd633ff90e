// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof extrusion
//!
//! Lifts the roof-footprint vertices already in the buffer to the resolved
//! height. Never adds geometry; only the vertices present before the call
//! are touched, so wall vertices appended later stay unaffected.

use crate::mesh::MeshData;
use crate::options::{ExtrusionGeometryType, ExtrusionOptions, ExtrusionStrategy};

/// Lift the roof vertices in place per the extrusion strategy.
///
/// Returns the extra wall height the `MaxHeight` strategy introduces when
/// it flattens a sloped roof to its highest vertex (0 for every other
/// strategy). No-op when the geometry type is `SideOnly`.
pub fn extrude_roof(md: &mut MeshData, max_height: f64, options: &ExtrusionOptions) -> f64 {
    if options.geometry_type == ExtrusionGeometryType::SideOnly {
        return 0.0;
    }

    let root_count = md.vertex_count();
    if root_count == 0 {
        return 0.0;
    }

    match options.strategy {
        ExtrusionStrategy::None => {}
        ExtrusionStrategy::PropertyHeight | ExtrusionStrategy::RangeHeight => {
            for i in 0..root_count {
                md.set_vertex_y(i, md.vertex_y(i) + max_height);
            }
        }
        ExtrusionStrategy::MinHeight => {
            if let Some((min, _)) = md.height_range(root_count) {
                for i in 0..root_count {
                    md.set_vertex_y(i, min + max_height);
                }
            }
        }
        ExtrusionStrategy::MaxHeight => {
            if let Some((min, max)) = md.height_range(root_count) {
                for i in 0..root_count {
                    md.set_vertex_y(i, max + max_height);
                }
                return max - min;
            }
        }
        ExtrusionStrategy::AbsoluteHeight => {
            for i in 0..root_count {
                md.set_vertex_y(i, max_height);
            }
        }
    }

    0.0
}
