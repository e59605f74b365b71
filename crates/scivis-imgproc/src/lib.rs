#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// scalar to color mapping module.
pub mod colormap;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;
