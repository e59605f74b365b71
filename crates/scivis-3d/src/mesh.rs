use std::collections::HashMap;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::IsoSurfaceError;

/// A vertex of a [`TriangleMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Position in normalized volume coordinates.
    pub position: Vec3,
    /// Unit normal, or zero when the vertex belongs to no triangle.
    pub normal: Vec3,
    /// Texture coordinate, equal to the position.
    pub tex_coord: Vec3,
    /// Base color.
    pub color: Vec4,
}

/// An indexed triangle mesh.
///
/// Every triangle holds three distinct indices into `vertices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// List of vertices.
    pub vertices: Vec<MeshVertex>,
    /// List of triangles, each triangle is three indices into `vertices`.
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over the corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices
            .iter()
            .map(|tri| tri.map(|i| self.vertices[i as usize].position))
    }

    /// Axis aligned bounds `(min, max)` of the vertex positions, or `None` if
    /// the mesh has no vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.min(v.position), hi.max(v.position))
        }))
    }
}

/// Incremental builder for a [`TriangleMesh`].
///
/// Vertices created on a voxel edge are cached by the unordered pair of voxel
/// indices, so neighboring triangles crossing the same edge share one vertex.
/// Triangle normals are accumulated on their vertices unnormalized, which
/// weights each face by its area, and normalized once in [`MeshBuilder::build`].
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<[u32; 3]>,
    edge_vertices: HashMap<(usize, usize), u32>,
    color: Vec4,
}

impl MeshBuilder {
    /// Create an empty builder writing `color` on every vertex.
    pub fn new(color: Vec4) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            edge_vertices: HashMap::new(),
            color,
        }
    }

    /// Number of vertices added so far.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles added so far.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Append a vertex and return its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index does not fit in `u32`.
    pub fn add_vertex(&mut self, position: Vec3) -> Result<u32, IsoSurfaceError> {
        let index = u32::try_from(self.vertices.len())
            .map_err(|_| IsoSurfaceError::TooManyVertices(u32::MAX as usize))?;

        self.vertices.push(MeshVertex {
            position,
            normal: Vec3::ZERO,
            tex_coord: position,
            color: self.color,
        });

        Ok(index)
    }

    /// Get the vertex on the edge between voxels `i` and `j`, creating it at
    /// `position` the first time the edge is seen.
    ///
    /// The edge is unordered: `(i, j)` and `(j, i)` return the same vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if `i == j` or the vertex cannot be indexed.
    pub fn vertex_on_edge(
        &mut self,
        i: usize,
        j: usize,
        position: Vec3,
    ) -> Result<u32, IsoSurfaceError> {
        debug_assert_ne!(i, j, "edge joins voxel {i} to itself");
        if i == j {
            return Err(IsoSurfaceError::DegenerateEdge(i));
        }

        let key = (i.min(j), i.max(j));
        if let Some(&index) = self.edge_vertices.get(&key) {
            return Ok(index);
        }

        let index = self.add_vertex(position)?;
        self.edge_vertices.insert(key, index);
        Ok(index)
    }

    /// Append a triangle and add its area weighted normal to its vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of bounds or repeated.
    pub fn add_triangle(&mut self, triangle: [u32; 3]) -> Result<(), IsoSurfaceError> {
        let [a, b, c] = triangle;

        if let Some(&i) = triangle
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            return Err(IsoSurfaceError::VertexIndexOutOfBounds(
                i,
                self.vertices.len(),
            ));
        }

        debug_assert!(
            a != b && b != c && a != c,
            "degenerate triangle ({a}, {b}, {c})"
        );
        if a == b || b == c || a == c {
            return Err(IsoSurfaceError::DegenerateTriangle(a, b, c));
        }

        let [p0, p1, p2] = triangle.map(|i| self.vertices[i as usize].position);
        let normal = (p1 - p0).cross(p2 - p0);
        for i in triangle {
            self.vertices[i as usize].normal += normal;
        }

        self.indices.push(triangle);
        Ok(())
    }

    /// Normalize the accumulated normals and return the mesh.
    pub fn build(mut self) -> TriangleMesh {
        for vertex in self.vertices.iter_mut() {
            vertex.normal = vertex.normal.normalize_or_zero();
        }

        TriangleMesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}
