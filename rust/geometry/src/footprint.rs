// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint roof caps
//!
//! Seeds a mesh buffer from a footprint polygon: the triangulated roof cap
//! plus the boundary edge list the wall generator walks. Footprint XY maps
//! to world XZ; the cap sits at y = 0 until the roof extruder lifts it.

use crate::error::{Error, Result};
use crate::mesh::MeshData;
use nalgebra::{Point2, Point3, Vector3};
use tilewall_core::Feature;

/// Triangulate a footprint into the buffer and register its boundary edges
pub fn cap_footprint(feature: &Feature, md: &mut MeshData) -> Result<()> {
    let points = &feature.points;
    if points.len() < 3 {
        return Err(Error::InvalidFootprint(format!(
            "footprint needs at least 3 points, got {}",
            points.len()
        )));
    }

    // Flatten vertices for earcutr
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for p in points {
        vertices.push(p.x);
        vertices.push(p.y);
    }

    let indices = earcutr::earcut(&vertices, &[], 2)
        .map_err(|e| Error::Triangulation(format!("{:?}", e)))?;

    let base = md.vertex_count() as u32;
    let normal = Vector3::y();
    let tangent = Vector3::x();

    // Planar UVs keep the roof texturable without a second channel
    for p in points {
        md.push_vertex(
            Point3::new(p.x, 0.0, p.y),
            normal,
            tangent,
            Point2::new(p.x, p.y),
        );
    }

    for tri in indices.chunks_exact(3) {
        md.add_triangle(
            0,
            base + tri[0] as u32,
            base + tri[1] as u32,
            base + tri[2] as u32,
        );
    }

    let count = points.len() as u32;
    for i in 0..count {
        md.add_edge(base + i, base + (i + 1) % count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f64) -> Feature {
        Feature::new(
            1,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(side, 0.0),
                Point2::new(side, side),
                Point2::new(0.0, side),
            ],
        )
    }

    #[test]
    fn test_square_cap() {
        let mut md = MeshData::new();
        cap_footprint(&square(10.0), &mut md).unwrap();

        assert_eq!(md.vertex_count(), 4);
        // two roof triangles in sub-mesh 0
        assert_eq!(md.triangles[0].len(), 6);
        // four boundary edges
        assert_eq!(md.edges.len(), 8);
        // channels stay synchronized
        assert_eq!(md.normals.len(), md.positions.len());
        assert_eq!(md.tangents.len(), md.positions.len());
        assert_eq!(md.uvs[0].len() / 2, md.vertex_count());
        // cap sits at y = 0
        for i in 0..md.vertex_count() {
            assert_eq!(md.vertex_y(i), 0.0);
        }
    }

    #[test]
    fn test_edges_close_the_loop() {
        let mut md = MeshData::new();
        cap_footprint(&square(4.0), &mut md).unwrap();
        assert_eq!(&md.edges[6..], &[3, 0]);
    }

    #[test]
    fn test_degenerate_footprint_is_an_error() {
        let mut md = MeshData::new();
        let feature = Feature::new(1, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(cap_footprint(&feature, &mut md).is_err());
    }
}
