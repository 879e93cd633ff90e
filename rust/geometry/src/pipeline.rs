// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tile-level batch processing
//!
//! Fans wall generation out across the features of one tile. Each feature
//! gets its own buffer and its own RNG seeded from the feature id, so the
//! output is identical regardless of thread scheduling; the per-feature
//! meshes are then merged in feature order.

use crate::atlas::FacadeAtlas;
use crate::footprint::cap_footprint;
use crate::mesh::MeshData;
use crate::modifier::TexturedWallModifier;
use crate::options::ExtrusionOptions;
use rayon::prelude::*;
use tilewall_core::Feature;
use tracing::warn;

/// Build roof and wall geometry for every feature of a tile.
///
/// A feature that fails (degenerate footprint, malformed height property)
/// is logged and skipped; the remaining features are unaffected.
pub fn build_tile_walls(
    features: &[Feature],
    options: &ExtrusionOptions,
    atlas: &FacadeAtlas,
    tile_scale: f64,
    seed: u64,
) -> MeshData {
    let meshes: Vec<Option<MeshData>> = features
        .par_iter()
        .map(|feature| {
            let mut md = MeshData::new();
            if let Err(err) = cap_footprint(feature, &mut md) {
                warn!(feature = feature.id, error = %err, "skipping feature, footprint cap failed");
                return None;
            }

            let mut modifier =
                TexturedWallModifier::with_seed(options.clone(), atlas.clone(), seed ^ feature.id);
            match modifier.apply(feature, &mut md, tile_scale) {
                Ok(()) => Some(md),
                Err(err) => {
                    warn!(feature = feature.id, error = %err, "skipping feature, wall generation failed");
                    None
                }
            }
        })
        .collect();

    let mut combined = MeshData::new();
    for md in meshes.into_iter().flatten() {
        combined.merge(&md);
    }
    combined
}
