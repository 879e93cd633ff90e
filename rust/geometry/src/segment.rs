// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge segmentation
//!
//! Walks the footprint boundary edges and subdivides each into wall-column
//! segments of the preferred section length. Long edges are consumed in
//! whole-column steps; residual length becomes a dedicated leftover column,
//! optionally split in half around the edge to center the sections.

use crate::atlas::FacadeEntry;
use crate::mesh::MeshData;
use nalgebra::Point3;

/// Subdivide the buffer's boundary edges into wall columns.
///
/// Returns a flat list where consecutive pairs (2i, 2i+1) are the start
/// and end points of one column. `preferred_wall_length` is the scaled
/// section length; one column is `preferred_wall_length / column_count`
/// wide. Edges shorter than one column produce a single leftover pair.
pub fn segment_edges(
    md: &MeshData,
    facade: &FacadeEntry,
    preferred_wall_length: f64,
    center_segments: bool,
) -> Vec<Point3<f64>> {
    let mut columns = Vec::new();

    let column_count = facade.column_count as f64;
    let single_column = preferred_wall_length / column_count;
    if single_column <= 0.0 {
        return columns;
    }

    for pair in md.edges.chunks_exact(2) {
        let edge_start = md.vertex(pair[0] as usize);
        let edge_end = md.vertex(pair[1] as usize);

        let span = edge_end - edge_start;
        let dist = span.norm();
        let direction = match span.try_normalize(1e-12) {
            Some(d) => d,
            None => continue,
        };

        let mut left_over = dist % single_column;
        let mut current_wall = dist;
        let mut start = edge_start;

        if center_segments && current_wall > single_column {
            columns.push(start);
            start += direction * (left_over / 2.0);
            columns.push(start);
            left_over /= 2.0;
        }

        while current_wall >= single_column {
            columns.push(start);
            let whole_columns = (current_wall / single_column).floor().min(column_count);
            let step_ratio = whole_columns / column_count;
            start += direction * (step_ratio * preferred_wall_length);
            columns.push(start);
            current_wall -= step_ratio * preferred_wall_length;
        }

        if left_over > 0.0 {
            columns.push(start);
            columns.push(edge_end);
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::AtlasRect;
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Vector3};

    fn single_edge_mesh(length: f64) -> MeshData {
        let mut md = MeshData::new();
        md.push_vertex(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::y(),
            Vector3::x(),
            Point2::new(0.0, 0.0),
        );
        md.push_vertex(
            Point3::new(length, 0.0, 0.0),
            Vector3::y(),
            Vector3::x(),
            Point2::new(0.0, 0.0),
        );
        md.add_edge(0, 1);
        md
    }

    fn facade(column_count: u32) -> FacadeEntry {
        FacadeEntry {
            column_count,
            ..FacadeEntry::new(AtlasRect::new(0.0, 0.0, 1.0, 1.0))
        }
    }

    fn column_lengths(columns: &[Point3<f64>]) -> Vec<f64> {
        columns
            .chunks_exact(2)
            .map(|c| (c[1] - c[0]).norm())
            .collect()
    }

    #[test]
    fn test_short_edge_yields_single_leftover_column() {
        let md = single_edge_mesh(3.0);
        let columns = segment_edges(&md, &facade(1), 5.0, false);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(columns[1], Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_exact_multiple_is_fully_covered() {
        // 10m edge, 5m sections, one column per section: two full columns,
        // no gap and no overlap
        let md = single_edge_mesh(10.0);
        let columns = segment_edges(&md, &facade(1), 5.0, false);

        assert_eq!(columns.len(), 4);
        let lengths = column_lengths(&columns);
        assert_relative_eq!(lengths[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-9);
        // consecutive columns share their split point
        assert_relative_eq!((columns[1] - columns[2]).norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(columns[3].x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_centering_emits_half_leftover_first() {
        let md = single_edge_mesh(7.0);
        let columns = segment_edges(&md, &facade(1), 5.0, true);

        let lengths = column_lengths(&columns);
        // leftover = 7 % 5 = 2, so the centering segment is 1m
        assert_relative_eq!(lengths[0], 1.0, epsilon = 1e-9);
        // full coverage: 1 + 5 + 1
        assert_eq!(lengths.len(), 3);
        assert_relative_eq!(lengths.iter().sum::<f64>(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(columns[5].x, 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_multi_column_step_consumes_whole_sections() {
        // 26m edge, 12m sections of 3 columns (4m each): leftover 2m,
        // then whole-column steps of 12m and 12m
        let md = single_edge_mesh(26.0);
        let columns = segment_edges(&md, &facade(3), 12.0, false);

        let lengths = column_lengths(&columns);
        assert_relative_eq!(lengths[0], 12.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[1], 12.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[2], 2.0, epsilon = 1e-9);
        assert_relative_eq!(lengths.iter().sum::<f64>(), 26.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_step_caps_at_section_length() {
        // 9m edge, 3 columns of 2m: floor(9/2)=4 capped at 3 columns,
        // so the bulk step is one 6m section then a 2m column and 1m leftover
        let md = single_edge_mesh(9.0);
        let columns = segment_edges(&md, &facade(3), 6.0, false);

        let lengths = column_lengths(&columns);
        assert_relative_eq!(lengths[0], 6.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_edge_is_skipped() {
        let mut md = single_edge_mesh(5.0);
        // duplicate point edge
        md.add_edge(0, 0);
        let columns = segment_edges(&md, &facade(1), 5.0, false);
        // only the real edge contributed
        assert_eq!(columns.len(), 2);
    }
}
