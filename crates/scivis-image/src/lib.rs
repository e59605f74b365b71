#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for 2D sample grids.
pub mod image;

/// volume representation for 3D sample grids.
pub mod volume;

/// Error types for the image module.
pub mod error;

/// Structured warning and error reporting.
pub mod diagnostics;

pub use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink, Severity};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::volume::{Grid3, Volume, VolumeSize};
