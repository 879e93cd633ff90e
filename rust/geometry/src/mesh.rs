// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point2, Point3, Vector3};

/// Mutable mesh buffer shared between the roof and wall stages.
///
/// Component arrays are flat `f32` (3 per vertex for positions, normals and
/// tangents; 2 per vertex for UVs) while the API surface stays in `f64`.
/// Invariant: normals, tangents and UV channel 0 are length-synchronized
/// with positions at every append.
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Vertex positions (x, y, z), y up
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Vertex tangents (tx, ty, tz)
    pub tangents: Vec<f32>,
    /// UV channels (u, v); channel 0 is always present
    pub uvs: Vec<Vec<f32>>,
    /// Boundary edge index pairs (2i, 2i+1) into the vertex arrays
    pub edges: Vec<u32>,
    /// Triangle index lists, one per sub-mesh; sub-mesh 0 is always present
    pub triangles: Vec<Vec<u32>>,
}

impl MeshData {
    /// Create a new empty mesh buffer
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            tangents: Vec::new(),
            uvs: vec![Vec::new()],
            edges: Vec::new(),
            triangles: vec![Vec::new()],
        }
    }

    /// Create a mesh buffer with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            tangents: Vec::with_capacity(vertex_count * 3),
            uvs: vec![Vec::with_capacity(vertex_count * 2)],
            edges: Vec::new(),
            triangles: vec![Vec::with_capacity(index_count)],
        }
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count across all sub-meshes
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.iter().map(|t| t.len()).sum::<usize>() / 3
    }

    /// Number of sub-meshes
    #[inline]
    pub fn sub_mesh_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the buffer has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Add a vertex with its normal, tangent and channel-0 UV.
    ///
    /// The single append path for all four synchronized channels.
    #[inline]
    pub fn push_vertex(
        &mut self,
        position: Point3<f64>,
        normal: Vector3<f64>,
        tangent: Vector3<f64>,
        uv: Point2<f64>,
    ) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);

        self.tangents.push(tangent.x as f32);
        self.tangents.push(tangent.y as f32);
        self.tangents.push(tangent.z as f32);

        self.uvs[0].push(uv.x as f32);
        self.uvs[0].push(uv.y as f32);
    }

    /// Read a vertex position
    #[inline]
    pub fn vertex(&self, index: usize) -> Point3<f64> {
        let i = index * 3;
        Point3::new(
            self.positions[i] as f64,
            self.positions[i + 1] as f64,
            self.positions[i + 2] as f64,
        )
    }

    /// Read a vertex height (y component)
    #[inline]
    pub fn vertex_y(&self, index: usize) -> f64 {
        self.positions[index * 3 + 1] as f64
    }

    /// Overwrite a vertex height (y component)
    #[inline]
    pub fn set_vertex_y(&mut self, index: usize, y: f64) {
        self.positions[index * 3 + 1] = y as f32;
    }

    /// Min/max height (y) over the first `limit` vertices.
    ///
    /// Returns `None` when the scanned prefix is empty.
    pub fn height_range(&self, limit: usize) -> Option<(f64, f64)> {
        let count = limit.min(self.vertex_count());
        if count == 0 {
            return None;
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        self.positions[..count * 3].chunks_exact(3).for_each(|chunk| {
            let y = chunk[1] as f64;
            min = min.min(y);
            max = max.max(y);
        });

        Some((min, max))
    }

    /// Add a boundary edge index pair
    #[inline]
    pub fn add_edge(&mut self, a: u32, b: u32) {
        self.edges.push(a);
        self.edges.push(b);
    }

    /// Add a triangle to a sub-mesh, creating intermediate sub-meshes as needed
    #[inline]
    pub fn add_triangle(&mut self, sub_mesh: usize, i0: u32, i1: u32, i2: u32) {
        while self.triangles.len() <= sub_mesh {
            self.triangles.push(Vec::new());
        }
        self.triangles[sub_mesh].extend_from_slice(&[i0, i1, i2]);
    }

    /// Append a finished triangle list as a new sub-mesh
    #[inline]
    pub fn push_sub_mesh(&mut self, indices: Vec<u32>) {
        self.triangles.push(indices);
    }

    /// Merge another buffer into this one, offsetting edge and triangle
    /// indices. Sub-meshes and UV channels merge index-wise, so buffers
    /// built with the same layout keep roofs and walls separated.
    pub fn merge(&mut self, other: &MeshData) {
        if other.is_empty() {
            return;
        }

        let offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tangents.extend_from_slice(&other.tangents);

        for (channel, uv) in other.uvs.iter().enumerate() {
            while self.uvs.len() <= channel {
                self.uvs.push(Vec::new());
            }
            self.uvs[channel].extend_from_slice(uv);
        }

        self.edges.extend(other.edges.iter().map(|&i| i + offset));

        for (sub, tris) in other.triangles.iter().enumerate() {
            while self.triangles.len() <= sub {
                self.triangles.push(Vec::new());
            }
            self.triangles[sub].extend(tris.iter().map(|&i| i + offset));
        }
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let md = MeshData::new();
        assert!(md.is_empty());
        assert_eq!(md.vertex_count(), 0);
        assert_eq!(md.triangle_count(), 0);
        assert_eq!(md.sub_mesh_count(), 1);
    }

    #[test]
    fn test_push_vertex_keeps_channels_synchronized() {
        let mut md = MeshData::new();
        md.push_vertex(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::y(),
            Vector3::x(),
            Point2::new(0.25, 0.5),
        );
        md.push_vertex(
            Point3::new(4.0, 5.0, 6.0),
            Vector3::y(),
            Vector3::x(),
            Point2::new(0.75, 0.5),
        );

        assert_eq!(md.positions.len() / 3, 2);
        assert_eq!(md.normals.len(), md.positions.len());
        assert_eq!(md.tangents.len(), md.positions.len());
        assert_eq!(md.uvs[0].len() / 2, md.vertex_count());
    }

    #[test]
    fn test_vertex_roundtrip() {
        let mut md = MeshData::new();
        md.push_vertex(
            Point3::new(1.5, -2.0, 8.0),
            Vector3::y(),
            Vector3::x(),
            Point2::new(0.0, 0.0),
        );
        let v = md.vertex(0);
        assert_eq!(v, Point3::new(1.5, -2.0, 8.0));

        md.set_vertex_y(0, 12.0);
        assert_eq!(md.vertex_y(0), 12.0);
    }

    #[test]
    fn test_height_range_scans_prefix_only() {
        let mut md = MeshData::new();
        for y in [3.0, -1.0, 7.0, 100.0] {
            md.push_vertex(
                Point3::new(0.0, y, 0.0),
                Vector3::y(),
                Vector3::x(),
                Point2::new(0.0, 0.0),
            );
        }

        // the fourth vertex is outside the scanned prefix
        assert_eq!(md.height_range(3), Some((-1.0, 7.0)));
        assert_eq!(md.height_range(0), None);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = MeshData::new();
        a.push_vertex(Point3::origin(), Vector3::y(), Vector3::x(), Point2::origin());
        a.push_vertex(Point3::origin(), Vector3::y(), Vector3::x(), Point2::origin());
        a.add_triangle(0, 0, 1, 0);
        a.add_edge(0, 1);

        let mut b = MeshData::new();
        b.push_vertex(Point3::origin(), Vector3::y(), Vector3::x(), Point2::origin());
        b.push_vertex(Point3::origin(), Vector3::y(), Vector3::x(), Point2::origin());
        b.add_triangle(0, 0, 1, 1);
        b.add_edge(0, 1);
        b.push_sub_mesh(vec![1, 0, 1]);

        a.merge(&b);

        assert_eq!(a.vertex_count(), 4);
        assert_eq!(a.triangles[0], vec![0, 1, 0, 2, 3, 3]);
        assert_eq!(a.triangles[1], vec![3, 2, 3]);
        assert_eq!(a.edges, vec![0, 1, 2, 3]);
    }
}
