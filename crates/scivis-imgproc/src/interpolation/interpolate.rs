use num_traits::{NumCast, Zero};
use serde::{Deserialize, Serialize};

use super::kernels::{barycentric, biquadratic, bilinear};
use super::Interpolate;
use scivis_image::Image;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Piecewise constant (nearest neighbor) interpolation
    #[default]
    Nearest,
    /// Bilinear interpolation over a 2x2 neighborhood
    Bilinear,
    /// Biquadratic interpolation over a 3x3 neighborhood
    Biquadratic,
    /// Barycentric interpolation over the two triangles of a 2x2 neighborhood
    Barycentric,
}

impl InterpolationMode {
    /// All the available modes.
    pub const ALL: [InterpolationMode; 4] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Biquadratic,
        InterpolationMode::Barycentric,
    ];

    /// Side length of the square neighborhood of source samples the mode reads.
    pub fn footprint(&self) -> usize {
        match self {
            InterpolationMode::Nearest => 1,
            InterpolationMode::Bilinear | InterpolationMode::Barycentric => 2,
            InterpolationMode::Biquadratic => 3,
        }
    }

    /// Lowercase name, as accepted by [`std::str::FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Biquadratic => "biquadratic",
            InterpolationMode::Barycentric => "barycentric",
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown interpolation mode.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown interpolation mode `{0}`, expected one of nearest, bilinear, biquadratic, barycentric")]
pub struct ParseInterpolationModeError(pub String);

impl std::str::FromStr for InterpolationMode {
    type Err = ParseInterpolationModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "piecewiseconstant" => Ok(InterpolationMode::Nearest),
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "biquadratic" | "quadratic" => Ok(InterpolationMode::Biquadratic),
            "barycentric" => Ok(InterpolationMode::Barycentric),
            _ => Err(ParseInterpolationModeError(s.to_string())),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// The neighborhood starts at `(floor(u), floor(v))` and extends one sample
/// (bilinear, barycentric) or two samples (biquadratic) towards +x and +y.
/// Every access is clamped to the image border independently per axis.
///
/// # Arguments
///
/// * `image` - The input image container. Must not be empty.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn interpolate_pixel<T: Interpolate, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    c: usize,
    interpolation: InterpolationMode,
) -> T {
    let (u0, v0) = (u.floor(), v.floor());
    let (iu, iv) = (u0 as i64, v0 as i64);

    let frac_u = <T::Float as NumCast>::from(u - u0).unwrap_or_else(T::Float::zero);
    let frac_v = <T::Float as NumCast>::from(v - v0).unwrap_or_else(T::Float::zero);

    let px = |du: i64, dv: i64| image.get_pixel_clamped(iu + du, iv + dv, c);

    match interpolation {
        InterpolationMode::Nearest => px(0, 0),
        InterpolationMode::Bilinear => {
            bilinear(&[px(0, 0), px(1, 0), px(0, 1), px(1, 1)], frac_u, frac_v)
        }
        InterpolationMode::Barycentric => {
            barycentric(&[px(0, 0), px(1, 0), px(0, 1), px(1, 1)], frac_u, frac_v)
        }
        InterpolationMode::Biquadratic => {
            let v: [T; 9] = std::array::from_fn(|i| px((i % 3) as i64, (i / 3) as i64));
            biquadratic(&v, frac_u, frac_v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scivis_image::{Image, ImageError, ImageSize};

    #[test]
    fn parse_modes() {
        for mode in InterpolationMode::ALL {
            assert_eq!(mode.name().parse::<InterpolationMode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(
            " Bilinear ".parse::<InterpolationMode>(),
            Ok(InterpolationMode::Bilinear)
        );
        assert!("bicubic".parse::<InterpolationMode>().is_err());
    }

    #[test]
    fn serde_names() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&InterpolationMode::Biquadratic)?;
        assert_eq!(json, "\"biquadratic\"");
        let mode: InterpolationMode = serde_json::from_str("\"barycentric\"")?;
        assert_eq!(mode, InterpolationMode::Barycentric);
        Ok(())
    }

    #[test]
    fn footprints() {
        assert_eq!(InterpolationMode::Nearest.footprint(), 1);
        assert_eq!(InterpolationMode::Bilinear.footprint(), 2);
        assert_eq!(InterpolationMode::Barycentric.footprint(), 2);
        assert_eq!(InterpolationMode::Biquadratic.footprint(), 3);
    }

    #[test]
    fn interpolate_pixel_smoke() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )?;

        let nearest = interpolate_pixel(&image, 1.9, 0.9, 0, InterpolationMode::Nearest);
        assert_eq!(nearest, 1.0);

        let bilinear = interpolate_pixel(&image, 0.5, 0.5, 0, InterpolationMode::Bilinear);
        assert_relative_eq!(bilinear, 2.0);

        // f(x, y) = x + 3y is affine, every mode but nearest reproduces it
        for mode in [
            InterpolationMode::Bilinear,
            InterpolationMode::Biquadratic,
            InterpolationMode::Barycentric,
        ] {
            let val = interpolate_pixel(&image, 0.25, 0.5, 0, mode);
            assert_relative_eq!(val, 0.25 + 1.5, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn interpolate_pixel_clamps_border() -> Result<(), ImageError> {
        let image = Image::<f64, 1>::new([2, 2].into(), vec![0.0, 1.0, 2.0, 3.0])?;

        // the +1 neighbor of the last column is the last column itself
        let val = interpolate_pixel(&image, 1.5, 0.0, 0, InterpolationMode::Bilinear);
        assert_eq!(val, 1.0);

        let val = interpolate_pixel(&image, 1.0, 1.0, 0, InterpolationMode::Biquadratic);
        assert_eq!(val, 3.0);

        let val = interpolate_pixel(&image, -3.0, -3.0, 0, InterpolationMode::Nearest);
        assert_eq!(val, 0.0);

        Ok(())
    }

    #[test]
    fn interpolate_pixel_channels() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::new([2, 1].into(), vec![0.0, 10.0, 1.0, 20.0])?;
        let c0 = interpolate_pixel(&image, 0.5, 0.0, 0, InterpolationMode::Bilinear);
        let c1 = interpolate_pixel(&image, 0.5, 0.0, 1, InterpolationMode::Bilinear);
        assert_relative_eq!(c0, 0.5);
        assert_relative_eq!(c1, 15.0);
        Ok(())
    }
}
