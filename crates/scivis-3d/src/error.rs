use scivis_imgproc::parallel::ParallelError;

/// An error type for the iso-surface extraction.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IsoSurfaceError {
    /// The execution strategy could not be honored.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// A triangle references the same vertex more than once.
    #[error("Degenerate triangle with indices ({0}, {1}, {2})")]
    DegenerateTriangle(u32, u32, u32),

    /// An edge key joins a voxel to itself.
    #[error("Degenerate edge on voxel {0}")]
    DegenerateEdge(usize),

    /// A triangle references a vertex that does not exist.
    #[error("Vertex index {0} is out of bounds ({1})")]
    VertexIndexOutOfBounds(u32, usize),

    /// The mesh outgrew 32-bit vertex indices.
    #[error("Too many vertices, the mesh index type holds at most {0}")]
    TooManyVertices(usize),
}
