//! Interpolation kernels and pixel interpolation for image resampling.
//!
//! The kernels are pure functions over fractional coordinates and work for
//! any value supporting addition and scaling by a float (scalars and `glam`
//! vectors alike), see [`Interpolate`].
//!
//! # Interpolation Modes
//!
//! - **Nearest**: piecewise constant, no blending
//! - **Bilinear**: linear along x on two rows, then along y
//! - **Biquadratic**: Lagrange quadratic over a 3x3 neighborhood
//! - **Barycentric**: linear over the two triangles of the unit square

pub(crate) mod interpolate;
mod kernels;
mod value;

pub use interpolate::{interpolate_pixel, InterpolationMode, ParseInterpolationModeError};
pub use kernels::{barycentric, biquadratic, bilinear, linear, quadratic};
pub use value::Interpolate;
