//! Iso-surface extraction from scalar volumes.
//!
//! The volume is walked cell by cell. Each cubic cell is split into six
//! tetrahedra, and each tetrahedron is classified against the iso-value by
//! which of its four corners lie below it. The resulting case selects the
//! triangles to emit from [`tables::CASE_TABLE`].

mod config;
mod marching_tetrahedra;

/// Lookup tables for the cell decomposition and the tetrahedron cases.
pub mod tables;

pub use config::IsoSurfaceConfig;
pub use marching_tetrahedra::marching_tetrahedra;
