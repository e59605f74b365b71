use std::ops::{Add, Mul};

use num_traits::Float;

/// A value that can be blended by the interpolation kernels.
///
/// Blending only needs addition and scaling by a weight. The weight type is the
/// floating accumulator matching the precision of the value, e.g. `f32` for
/// `f32` and `glam::Vec3`, `f64` for `f64` and `glam::DVec3`.
pub trait Interpolate: Copy + Add<Output = Self> + Mul<Self::Float, Output = Self> {
    /// Floating point type used for weights and fractional coordinates.
    type Float: Float;
}

macro_rules! impl_interpolate {
    ($float:ty => $($t:ty),+) => {
        $(
            impl Interpolate for $t {
                type Float = $float;
            }
        )+
    };
}

impl_interpolate!(f32 => f32, glam::Vec2, glam::Vec3, glam::Vec3A, glam::Vec4);
impl_interpolate!(f64 => f64, glam::DVec2, glam::DVec3, glam::DVec4);
