// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facade band synthesis
//!
//! Emits the vertical quad strips for one wall column: first floor at the
//! bottom, top band below the roof line, and repeating mid-floor bands in
//! between. Bands are drawn in that order; the top-floor pass also emits
//! the partial mid band left over when the mid region is not an exact
//! multiple of one floor height, and mid floors then fill downward from
//! beneath it.
//!
//! Atlases cannot tile, so a column never repeats the texture
//! horizontally: wide columns sample up to the full facade width, and a
//! column narrower than one window column falls back to a thin fixed UV
//! strip instead of stretching.

use crate::atlas::{AtlasRect, FacadeEntry};
use crate::mesh::MeshData;
use nalgebra::{Point2, Point3, Vector3};

/// Columns narrower than this fraction of one window column use the
/// narrow-wall UV strip
const WALL_SIZE_EPSILON: f64 = 0.99;
/// UV width of the narrow-wall strip
const NARROW_WALL_WIDTH_DELTA: f64 = 0.01;
/// UV height of the leftover partial band row
const SHORT_ROW_HEIGHT_DELTA: f64 = 0.015;
/// Tolerance when deciding whether another whole mid floor fits
const MID_FLOOR_TOLERANCE: f64 = 0.01;
/// Minimum height consumed per mid-floor iteration; terminates the band
/// loop even for degenerate tiny floor heights
const MIN_FLOOR_STEP: f64 = 0.1;

/// Tile-scaled facade metrics shared by every column of one feature
#[derive(Debug, Clone)]
pub(crate) struct FacadeMetrics {
    pub rect: AtlasRect,
    pub floor_height: f64,
    pub first_floor_height: f64,
    pub top_floor_height: f64,
    pub preferred_wall_length: f64,
    mid_floor_count: f64,
    column_count: f64,
    top_section_ratio: f64,
    bottom_section_ratio: f64,
}

impl FacadeMetrics {
    pub fn new(facade: &FacadeEntry, tile_scale: f64) -> Self {
        debug_assert!(facade.column_count > 0 && facade.mid_floor_count > 0);
        Self {
            rect: facade.texture_rect,
            floor_height: tile_scale * facade.floor_height,
            first_floor_height: tile_scale * facade.first_floor_height,
            top_floor_height: tile_scale * facade.top_floor_height,
            preferred_wall_length: tile_scale * facade.preferred_edge_section_length,
            mid_floor_count: facade.mid_floor_count as f64,
            column_count: facade.column_count as f64,
            top_section_ratio: facade.top_section_ratio,
            bottom_section_ratio: facade.bottom_section_ratio,
        }
    }

    /// World-space width of one window column
    fn single_column_width(&self) -> f64 {
        self.preferred_wall_length / self.column_count
    }

    /// World-space height of one mid floor, per the facade metadata
    fn single_mid_floor_height(&self) -> f64 {
        self.floor_height / self.mid_floor_count
    }

    /// V coordinate where the top section ends and the mid section begins
    fn bottom_of_top_uv(&self) -> f64 {
        self.rect.y_max() - self.rect.height * self.top_section_ratio
    }

    /// V coordinate where the bottom section ends
    fn top_of_bottom_uv(&self) -> f64 {
        self.rect.y_min() + self.rect.height * self.bottom_section_ratio
    }

    /// UV height of the mid section
    fn mid_uv_height(&self) -> f64 {
        self.rect.height * (1.0 - self.top_section_ratio - self.bottom_section_ratio)
    }

    /// World-space height of one full mid band, aspect-ratio corrected so
    /// the mid section of the texture is not stretched vertically
    fn mid_band_world_height(&self) -> f64 {
        self.preferred_wall_length
            * (1.0 - self.top_section_ratio - self.bottom_section_ratio)
            * (self.rect.height / self.rect.width)
    }
}

/// Wall-band heights for one feature: first floor reserved from the
/// bottom, top band from the remainder, mid floors fill the rest
#[derive(Debug, Clone, Copy)]
pub(crate) struct BandHeights {
    pub total: f64,
    pub first: f64,
    pub top: f64,
    pub mid: f64,
}

impl BandHeights {
    pub fn partition(wall_height: f64, metrics: &FacadeMetrics) -> Self {
        let first = wall_height.min(metrics.first_floor_height);
        let top = if (wall_height - first) < metrics.top_floor_height {
            0.0
        } else {
            metrics.top_floor_height
        };
        let mid = (wall_height - (first + top)).max(0.0);
        Self {
            total: wall_height,
            first,
            top,
            mid,
        }
    }
}

/// Per-column derived state, computed once and threaded through the three
/// band passes
#[derive(Debug)]
pub(crate) struct ColumnContext {
    v1: Point3<f64>,
    v2: Point3<f64>,
    /// Unnormalized wall direction, doubles as the tangent
    tangent: Vector3<f64>,
    /// Outward wall normal, shared by every vertex of the column
    normal: Vector3<f64>,
    /// Left/right U coordinates after the narrow-wall decision
    u_min: f64,
    u_max: f64,
    /// Running band heights for the top-down passes
    current_y1: f64,
    current_y2: f64,
}

impl ColumnContext {
    /// Derive the column state; `None` for zero-length columns
    pub fn new(v1: Point3<f64>, v2: Point3<f64>, metrics: &FacadeMetrics) -> Option<Self> {
        let tangent = v2 - v1;
        let width = tangent.norm();
        let normal = Vector3::new(-(v1.z - v2.z), 0.0, v1.x - v2.x).try_normalize(1e-12)?;

        // no repetition across the atlas: wide columns take up to the full
        // facade width, slivers get a thin fixed strip
        let column_scale_ratio = (width / metrics.preferred_wall_length).min(1.0);
        let u_min = metrics.rect.x_min();
        let u_max = if width < metrics.single_column_width() * WALL_SIZE_EPSILON {
            u_min + NARROW_WALL_WIDTH_DELTA
        } else {
            u_min + metrics.rect.width * column_scale_ratio
        };

        Some(Self {
            v1,
            v2,
            tangent,
            normal,
            u_min,
            u_max,
            current_y1: v1.y,
            current_y2: v2.y,
        })
    }

    /// Emit one flat-shaded quad: 4 vertices, 2 triangles into `tris`
    fn push_quad(
        &self,
        md: &mut MeshData,
        tris: &mut Vec<u32>,
        top: (f64, f64),
        bottom: (f64, f64),
        uv_rows: (f64, f64),
    ) {
        let ind = md.vertex_count() as u32;

        md.push_vertex(
            Point3::new(self.v1.x, top.0, self.v1.z),
            self.normal,
            self.tangent,
            Point2::new(self.u_min, uv_rows.0),
        );
        md.push_vertex(
            Point3::new(self.v2.x, top.1, self.v2.z),
            self.normal,
            self.tangent,
            Point2::new(self.u_max, uv_rows.0),
        );
        md.push_vertex(
            Point3::new(self.v1.x, bottom.0, self.v1.z),
            self.normal,
            self.tangent,
            Point2::new(self.u_min, uv_rows.1),
        );
        md.push_vertex(
            Point3::new(self.v2.x, bottom.1, self.v2.z),
            self.normal,
            self.tangent,
            Point2::new(self.u_max, uv_rows.1),
        );

        tris.extend_from_slice(&[ind, ind + 1, ind + 2, ind + 1, ind + 3, ind + 2]);
    }

    /// First floor: one quad at the very bottom of the wall, UV rows from
    /// the bottom-section boundary down to the rect floor
    pub fn first_floor(
        &self,
        md: &mut MeshData,
        tris: &mut Vec<u32>,
        heights: &BandHeights,
        metrics: &FacadeMetrics,
    ) {
        self.push_quad(
            md,
            tris,
            (
                self.v1.y - heights.total + heights.first,
                self.v2.y - heights.total + heights.first,
            ),
            (self.v1.y - heights.total, self.v2.y - heights.total),
            (metrics.top_of_bottom_uv(), metrics.rect.y_min()),
        );
    }

    /// Top of the wall: the partial mid band left over after whole-floor
    /// division, then the top band itself (emitted even at zero height).
    ///
    /// When the mid region is empty the leftover is the top height modulo
    /// one mid floor.
    pub fn top_floor(
        &mut self,
        md: &mut MeshData,
        tris: &mut Vec<u32>,
        heights: &BandHeights,
        metrics: &FacadeMetrics,
    ) {
        let region = if heights.mid > 0.0 {
            heights.mid
        } else {
            heights.top
        };
        let left_over = region % metrics.single_mid_floor_height();

        let top = (self.current_y1, self.current_y2);
        self.current_y1 -= left_over;
        self.current_y2 -= left_over;
        self.push_quad(
            md,
            tris,
            top,
            (self.current_y1, self.current_y2),
            (
                metrics.rect.y_max(),
                metrics.rect.y_max() - SHORT_ROW_HEIGHT_DELTA,
            ),
        );

        let top = (self.current_y1, self.current_y2);
        self.current_y1 -= heights.top;
        self.current_y2 -= heights.top;
        self.push_quad(
            md,
            tris,
            top,
            (self.current_y1, self.current_y2),
            (metrics.rect.y_max(), metrics.bottom_of_top_uv()),
        );
    }

    /// Mid floors: full bands filling downward from beneath the leftover,
    /// consuming up to `mid_floor_count` whole sub-floors per quad
    pub fn mid_floors(
        &mut self,
        md: &mut MeshData,
        tris: &mut Vec<u32>,
        heights: &BandHeights,
        metrics: &FacadeMetrics,
    ) {
        let mut left_over = heights.mid;
        let single_floor_height = metrics.single_mid_floor_height();
        let top_of_mid_uv = metrics.bottom_of_top_uv();
        let mid_uv_height = metrics.mid_uv_height();
        let band_height = metrics.mid_band_world_height();

        while left_over >= single_floor_height - MID_FLOOR_TOLERANCE {
            let whole_floors = (left_over / single_floor_height)
                .floor()
                .min(metrics.mid_floor_count);
            let step_ratio = whole_floors / metrics.mid_floor_count;

            let top = (self.current_y1, self.current_y2);
            self.current_y1 -= band_height * step_ratio;
            self.current_y2 -= band_height * step_ratio;
            self.push_quad(
                md,
                tris,
                top,
                (self.current_y1, self.current_y2),
                (top_of_mid_uv, top_of_mid_uv - mid_uv_height * step_ratio),
            );

            left_over -= (band_height * step_ratio).max(MIN_FLOOR_STEP);
        }
    }
}
