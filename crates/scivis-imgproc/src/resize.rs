use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpolation::{interpolate_pixel, Interpolate, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy, ParallelError};
use scivis_image::{Diagnostic, DiagnosticSink, Image, ImageError, ImageSize};

/// Errors raised while resampling an image.
#[derive(Error, Debug, PartialEq)]
pub enum ResizeError {
    /// The source or destination image is invalid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The execution strategy could not be honored.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Options for [`upsample`] and [`upsample_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Kernel used for every output pixel.
    pub mode: InterpolationMode,
    /// How output rows are distributed over threads.
    pub strategy: ExecutionStrategy,
}

impl ResampleConfig {
    /// Create a config with the given mode and the default execution strategy.
    pub fn new(mode: InterpolationMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// Map an output coordinate to the source grid.
///
/// The scale is `src_len / dst_len` and no half-pixel offset is applied, so
/// output index 0 lands exactly on source index 0.
#[inline]
pub fn source_coordinate(o: usize, src_len: usize, dst_len: usize) -> f64 {
    let scale = src_len as f64 / dst_len as f64;
    o as f64 * scale
}

/// Resample an image into a new allocation of size `new_size`.
///
/// See [`upsample_into`] for the sampling rules.
///
/// # Example
///
/// ```
/// use scivis_image::{Diagnostic, Image, ImageSize};
/// use scivis_imgproc::interpolation::InterpolationMode;
/// use scivis_imgproc::resize::{upsample, ResampleConfig};
///
/// let image = Image::<f32, 1>::new([2, 2].into(), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let upsampled = upsample(
///     &image,
///     ImageSize { width: 4, height: 4 },
///     &ResampleConfig::new(InterpolationMode::Bilinear),
///     &mut diagnostics,
/// )
/// .unwrap();
///
/// assert_eq!(upsampled.size().width, 4);
/// assert_eq!(upsampled.as_slice()[1], 0.5);
/// assert!(diagnostics.is_empty());
/// ```
pub fn upsample<T, const C: usize>(
    src: &Image<T, C>,
    new_size: ImageSize,
    config: &ResampleConfig,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<Image<T, C>, ResizeError>
where
    T: Interpolate + Default + Send + Sync,
{
    let mut dst = Image::from_size_val(new_size, T::default())?;
    upsample_into(src, &mut dst, config, diagnostics)?;
    Ok(dst)
}

/// Resample an image into a preallocated destination.
///
/// The size of `dst` is the output size. For each output pixel `(ox, oy)` the
/// source position is `(ox * Win / Wout, oy * Hin / Hout)` and the selected
/// kernel reads the neighborhood starting at its floor, clamped to the source
/// border.
///
/// Only single channel images are the intended input. Images with more
/// channels are reported as a warning and every channel is interpolated
/// independently. An empty destination is reported as a warning and left
/// untouched.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `config` - Interpolation mode and execution strategy.
/// * `diagnostics` - Receives the recoverable problems found on the way.
///
/// # Errors
///
/// Returns an error if the source image is empty or the execution strategy is
/// invalid.
pub fn upsample_into<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    config: &ResampleConfig,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<(), ResizeError>
where
    T: Interpolate + Send + Sync,
{
    if src.size().is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    if C != 1 {
        diagnostics.report(Diagnostic::warning(format!(
            "resampling a {} channel image, channels are interpolated independently",
            C
        )));
    }

    if dst.size().is_empty() {
        diagnostics.report(Diagnostic::warning(format!(
            "output size {} is empty, nothing to resample",
            dst.size()
        )));
        return Ok(());
    }

    log::debug!(
        "resampling {} -> {} with {} ({:?})",
        src.size(),
        dst.size(),
        config.mode,
        config.strategy
    );

    let (src_w, src_h) = (src.width(), src.height());
    let (dst_w, dst_h) = (dst.width(), dst.height());
    let mode = config.mode;

    parallel::par_iter_rows_indexed(dst, config.strategy, |ox, oy, pixel| {
        let u = source_coordinate(ox, src_w, dst_w);
        let v = source_coordinate(oy, src_h, dst_h);
        for (k, out) in pixel.iter_mut().enumerate() {
            *out = interpolate_pixel(src, u, v, k, mode);
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scivis_image::{LogSink, Severity};

    fn ramp() -> Result<Image<f32, 1>, ImageError> {
        Image::new([2, 2].into(), vec![0.0, 1.0, 2.0, 3.0])
    }

    #[test]
    fn source_coordinate_has_no_offset() {
        assert_eq!(source_coordinate(0, 2, 4), 0.0);
        assert_eq!(source_coordinate(1, 2, 4), 0.5);
        assert_eq!(source_coordinate(3, 2, 4), 1.5);
        assert_eq!(source_coordinate(2, 6, 3), 4.0);
    }

    #[test]
    fn upsample_bilinear_2x2_to_4x4() -> Result<(), ResizeError> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let dst = upsample(
            &ramp()?,
            [4, 4].into(),
            &ResampleConfig::new(InterpolationMode::Bilinear),
            &mut diagnostics,
        )?;

        #[rustfmt::skip]
        let expected = [
            0.0, 0.5, 1.0, 1.0,
            1.0, 1.5, 2.0, 2.0,
            2.0, 2.5, 3.0, 3.0,
            2.0, 2.5, 3.0, 3.0,
        ];
        for (&a, &b) in dst.as_slice().iter().zip(expected.iter()) {
            assert_relative_eq!(a, b);
        }
        assert!(diagnostics.is_empty());
        Ok(())
    }

    #[test]
    fn constant_image_stays_constant() -> Result<(), ResizeError> {
        let src = Image::<f64, 1>::from_size_val([3, 5].into(), 4.25)?;
        for mode in InterpolationMode::ALL {
            let dst = upsample(&src, [7, 11].into(), &ResampleConfig::new(mode), &mut LogSink)?;
            for &val in dst.as_slice() {
                assert_relative_eq!(val, 4.25, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn nearest_keeps_origin() -> Result<(), ResizeError> {
        let src = Image::<f32, 1>::new([3, 2].into(), vec![9.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
        let dst = upsample(
            &src,
            [7, 5].into(),
            &ResampleConfig::new(InterpolationMode::Nearest),
            &mut LogSink,
        )?;
        assert_eq!(dst.get_pixel(0, 0, 0)?, &9.0);
        for &val in dst.as_slice() {
            assert!(src.as_slice().contains(&val));
        }
        Ok(())
    }

    #[test]
    fn multi_channel_is_reported() -> Result<(), ResizeError> {
        let src = Image::<f32, 2>::new([2, 1].into(), vec![0.0, 10.0, 1.0, 20.0])?;
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let dst = upsample(
            &src,
            [4, 1].into(),
            &ResampleConfig::new(InterpolationMode::Bilinear),
            &mut diagnostics,
        )?;

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(dst.channel(0)?.as_slice(), &[0.0, 0.5, 1.0, 1.0]);
        assert_eq!(dst.channel(1)?.as_slice(), &[10.0, 15.0, 20.0, 20.0]);
        Ok(())
    }

    #[test]
    fn empty_output_is_a_warning() -> Result<(), ResizeError> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let dst = upsample(
            &ramp()?,
            [0, 4].into(),
            &ResampleConfig::default(),
            &mut diagnostics,
        )?;
        assert!(dst.as_slice().is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        Ok(())
    }

    #[test]
    fn empty_source_is_an_error() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::new([0, 0].into(), vec![])?;
        let res = upsample(&src, [2, 2].into(), &ResampleConfig::default(), &mut LogSink);
        assert_eq!(
            res,
            Err(ResizeError::Image(ImageError::InvalidImageSize(0, 0, 2, 2)))
        );
        Ok(())
    }

    #[test]
    fn strategies_agree() -> Result<(), ResizeError> {
        let src = Image::<f32, 1>::from_fn([5, 4].into(), |x, y| [(x * x + 3 * y) as f32]);
        for mode in InterpolationMode::ALL {
            let serial = ResampleConfig {
                mode,
                strategy: ExecutionStrategy::Serial,
            };
            let expected = upsample(&src, [13, 9].into(), &serial, &mut LogSink)?;
            for strategy in [ExecutionStrategy::ParallelRows, ExecutionStrategy::Fixed(3)] {
                let config = ResampleConfig { mode, strategy };
                let dst = upsample(&src, [13, 9].into(), &config, &mut LogSink)?;
                assert_eq!(dst, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn invalid_strategy_is_an_error() -> Result<(), ResizeError> {
        let config = ResampleConfig {
            mode: InterpolationMode::Bilinear,
            strategy: ExecutionStrategy::Fixed(0),
        };
        let res = upsample(&ramp()?, [4, 4].into(), &config, &mut LogSink);
        assert_eq!(
            res,
            Err(ResizeError::Parallel(ParallelError::InvalidThreadCount(0)))
        );
        Ok(())
    }

    #[test]
    fn config_from_json() -> Result<(), serde_json::Error> {
        let config: ResampleConfig = serde_json::from_str("{}")?;
        assert_eq!(config, ResampleConfig::default());

        let config: ResampleConfig =
            serde_json::from_str(r#"{"mode": "biquadratic", "strategy": {"fixed": 2}}"#)?;
        assert_eq!(config.mode, InterpolationMode::Biquadratic);
        assert_eq!(config.strategy, ExecutionStrategy::Fixed(2));
        Ok(())
    }
}
