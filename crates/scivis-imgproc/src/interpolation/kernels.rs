use num_traits::{One, Zero};

use super::Interpolate;

/// Kernel for linear interpolation between two values.
///
/// Returns `a` for `x <= 0`, `b` for `x >= 1` and the affine blend
/// `a * (1 - x) + b * x` in between.
///
/// # Example
///
/// ```
/// use scivis_imgproc::interpolation::linear;
///
/// assert_eq!(linear(2.0f32, 4.0, 0.25), 2.5);
/// assert_eq!(linear(2.0f32, 4.0, -1.0), 2.0);
/// assert_eq!(linear(2.0f32, 4.0, 3.0), 4.0);
/// ```
#[inline]
pub fn linear<T: Interpolate>(a: T, b: T, x: T::Float) -> T {
    if x <= T::Float::zero() {
        return a;
    }
    if x >= T::Float::one() {
        return b;
    }
    a * (T::Float::one() - x) + b * x
}

/// Kernel for bilinear interpolation over a unit square.
///
/// ```text
///  2------3
///  |      |
/// y|  .   |
///  |      |
///  0------1
///     x
/// ```
///
/// # Arguments
///
/// * `v` - The corner values ordered bottom-left, bottom-right, top-left, top-right.
/// * `x` - The fractional x coordinate.
/// * `y` - The fractional y coordinate.
#[inline]
pub fn bilinear<T: Interpolate>(v: &[T; 4], x: T::Float, y: T::Float) -> T {
    let bottom = linear(v[0], v[1], x);
    let top = linear(v[2], v[3], x);
    linear(bottom, top, y)
}

/// Kernel for quadratic interpolation through three control points.
///
/// The control points sit at the parameter positions `0`, `1` and `2`:
///
/// ```text
/// a--.----b------c
/// 0  x    1      2
/// ```
///
/// The Lagrange quadratic passes exactly through all three points, so
/// `quadratic(a, b, c, 1) == b`. Values of `x` outside `[0, 2]` extrapolate.
#[inline]
pub fn quadratic<T: Interpolate>(a: T, b: T, c: T, x: T::Float) -> T {
    let one = T::Float::one();
    let two = one + one;
    let half = one / two;

    let wa = (x - one) * (x - two) * half;
    let wb = x * (two - x);
    let wc = x * (x - one) * half;

    a * wa + b * wb + c * wc
}

/// Kernel for biquadratic interpolation over a 3x3 neighborhood.
///
/// ```text
/// 6-------7-------8
/// |       |       |
/// 3-------4-------5
/// |       |       |
/// 0-------1-------2
/// ```
///
/// Applies [`quadratic`] along x on each row, then along y across the rows.
#[inline]
pub fn biquadratic<T: Interpolate>(v: &[T; 9], x: T::Float, y: T::Float) -> T {
    let bottom = quadratic(v[0], v[1], v[2], x);
    let middle = quadratic(v[3], v[4], v[5], x);
    let top = quadratic(v[6], v[7], v[8], x);
    quadratic(bottom, middle, top, y)
}

/// Kernel for barycentric interpolation over the two triangles of a unit square.
///
/// ```text
///  2---------3
///  |'-.      |
///  |   '-.   |
/// y|      '-.|
///  0---------1
///      x
/// ```
///
/// The square is split along the diagonal from corner 1 to corner 2. Points with
/// `x + y <= 1` blend corners `{0, 1, 2}`, the rest blend `{1, 2, 3}`; both agree
/// on the diagonal.
#[inline]
pub fn barycentric<T: Interpolate>(v: &[T; 4], x: T::Float, y: T::Float) -> T {
    if x + y <= T::Float::one() {
        barycentric_lower(v, x, y)
    } else {
        barycentric_upper(v, x, y)
    }
}

#[inline]
fn barycentric_lower<T: Interpolate>(v: &[T; 4], x: T::Float, y: T::Float) -> T {
    v[0] * (T::Float::one() - x - y) + v[1] * x + v[2] * y
}

#[inline]
fn barycentric_upper<T: Interpolate>(v: &[T; 4], x: T::Float, y: T::Float) -> T {
    let one = T::Float::one();
    v[1] * (one - y) + v[2] * (one - x) + v[3] * (x + y - one)
}
