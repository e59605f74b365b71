#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the 3d module.
pub mod error;

/// Synthetic volumes for testing and demos.
pub mod generator;

/// Iso-surface extraction algorithms.
pub mod isosurface;

/// Triangle mesh types.
pub mod mesh;

pub use crate::error::IsoSurfaceError;
