// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Textured side-wall modifier
//!
//! The caller-facing entry point: takes a footprint feature and a mesh
//! buffer already seeded with the roof polygon, lifts the roof to the
//! resolved height, and extends the buffer with the facade wall geometry.

use crate::atlas::FacadeAtlas;
use crate::error::Result;
use crate::height::resolve_extrusion_height;
use crate::mesh::MeshData;
use crate::options::{ExtrusionGeometryType, ExtrusionOptions};
use crate::roof::extrude_roof;
use crate::segment::segment_edges;
use crate::walls::{BandHeights, ColumnContext, FacadeMetrics};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tilewall_core::Feature;

/// Seed used when no explicit seed is provided
const DEFAULT_SEED: u64 = 42;

/// Generates textured building walls into a caller-owned mesh buffer.
///
/// One facade entry is picked per feature from the atlas; the RNG is
/// seedable so identical seeds produce identical tiles.
#[derive(Debug, Clone)]
pub struct TexturedWallModifier {
    options: ExtrusionOptions,
    atlas: FacadeAtlas,
    center_segments: bool,
    separate_submesh: bool,
    rng: ChaCha8Rng,
}

impl TexturedWallModifier {
    /// Create a modifier with the default seed
    pub fn new(options: ExtrusionOptions, atlas: FacadeAtlas) -> Self {
        Self::with_seed(options, atlas, DEFAULT_SEED)
    }

    /// Create a modifier with an explicit facade-selection seed
    pub fn with_seed(options: ExtrusionOptions, atlas: FacadeAtlas, seed: u64) -> Self {
        Self {
            options,
            atlas,
            center_segments: true,
            separate_submesh: true,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Whether edge sections are centered on their edge (default true)
    pub fn center_segments(mut self, on: bool) -> Self {
        self.center_segments = on;
        self
    }

    /// Whether wall triangles land in their own sub-mesh (default true) or
    /// are appended to sub-mesh 0
    pub fn separate_submesh(mut self, on: bool) -> Self {
        self.separate_submesh = on;
        self
    }

    /// Current extrusion options (min/max bounds may have been corrected)
    pub fn options(&self) -> &ExtrusionOptions {
        &self.options
    }

    /// Process one feature: lift the roof, then synthesize the facade.
    ///
    /// Degenerate input (empty buffer, empty footprint, empty facade set)
    /// is a no-op. A malformed height property aborts this feature with an
    /// error before the buffer is touched.
    pub fn apply(&mut self, feature: &Feature, md: &mut MeshData, tile_scale: f64) -> Result<()> {
        if md.vertex_count() == 0 || feature.points.is_empty() {
            return Ok(());
        }
        let facade = match self.atlas.choose(&mut self.rng) {
            Some(facade) => facade.clone(),
            None => return Ok(()),
        };

        let metrics = FacadeMetrics::new(&facade, tile_scale);

        let (min_height, max_height) = resolve_extrusion_height(feature, &mut self.options)?;
        let max_height = max_height * self.options.scale_factor * tile_scale;
        let min_height = min_height * self.options.scale_factor * tile_scale;
        let mut wall_height = max_height - min_height;

        wall_height += extrude_roof(md, max_height, &self.options);

        if self.options.geometry_type == ExtrusionGeometryType::RoofOnly {
            return Ok(());
        }

        let heights = BandHeights::partition(wall_height, &metrics);
        let columns = segment_edges(md, &facade, metrics.preferred_wall_length, self.center_segments);

        let mut wall_triangles: Vec<u32> = Vec::new();
        for pair in columns.chunks_exact(2) {
            let Some(mut column) = ColumnContext::new(pair[0], pair[1], &metrics) else {
                continue;
            };
            column.first_floor(md, &mut wall_triangles, &heights, &metrics);
            column.top_floor(md, &mut wall_triangles, &heights, &metrics);
            column.mid_floors(md, &mut wall_triangles, &heights, &metrics);
        }

        if self.separate_submesh {
            md.push_sub_mesh(wall_triangles);
        } else {
            md.triangles[0].extend_from_slice(&wall_triangles);
        }

        Ok(())
    }
}
