use approx::assert_relative_eq;

use scivis_image::{Diagnostic, Image, ImageSize, LogSink, Severity};
use scivis_imgproc::colormap::{apply_colormap, ColorMap};
use scivis_imgproc::interpolation::{bilinear, interpolate_pixel, InterpolationMode};
use scivis_imgproc::resize::{source_coordinate, upsample, ResampleConfig, ResizeError};

#[test]
fn bilinear_matches_direct_evaluation() -> Result<(), ResizeError> {
    let src = Image::<f32, 1>::new([2, 2].into(), vec![0.0, 1.0, 2.0, 3.0])?;
    let new_size = ImageSize {
        width: 4,
        height: 4,
    };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let dst = upsample(
        &src,
        new_size,
        &ResampleConfig::new(InterpolationMode::Bilinear),
        &mut diagnostics,
    )?;
    assert!(diagnostics.is_empty());

    for oy in 0..new_size.height {
        for ox in 0..new_size.width {
            let u = source_coordinate(ox, 2, 4);
            let v = source_coordinate(oy, 2, 4);
            let (x0, y0) = (u.floor() as i64, v.floor() as i64);
            let corners = [
                src.get_pixel_clamped(x0, y0, 0),
                src.get_pixel_clamped(x0 + 1, y0, 0),
                src.get_pixel_clamped(x0, y0 + 1, 0),
                src.get_pixel_clamped(x0 + 1, y0 + 1, 0),
            ];
            let expected = bilinear(&corners, (u - u.floor()) as f32, (v - v.floor()) as f32);
            assert_relative_eq!(*dst.get_pixel(ox, oy, 0)?, expected);
            assert_relative_eq!(
                *dst.get_pixel(ox, oy, 0)?,
                interpolate_pixel(&src, u, v, 0, InterpolationMode::Bilinear)
            );
        }
    }
    Ok(())
}

#[test]
fn biquadratic_differs_from_bilinear_on_curved_data() -> Result<(), ResizeError> {
    // f(x) = x^2 along each row
    let src = Image::<f64, 1>::from_fn([4, 2].into(), |x, _| [(x * x) as f64]);
    let new_size = [8, 2].into();

    let linear = upsample(
        &src,
        new_size,
        &ResampleConfig::new(InterpolationMode::Bilinear),
        &mut LogSink,
    )?;
    let quad = upsample(
        &src,
        new_size,
        &ResampleConfig::new(InterpolationMode::Biquadratic),
        &mut LogSink,
    )?;

    // output x = 1 maps to source x = 0.5
    assert_relative_eq!(*linear.get_pixel(1, 0, 0)?, 0.5);
    assert_relative_eq!(*quad.get_pixel(1, 0, 0)?, 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn upsample_then_colormap() -> Result<(), Box<dyn std::error::Error>> {
    let src = Image::<f32, 3>::from_fn([2, 2].into(), |x, y| {
        let t = (x + y) as f32 / 2.0;
        [t, t, t]
    });

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let rgb = upsample(
        &src,
        [3, 3].into(),
        &ResampleConfig::new(InterpolationMode::Barycentric),
        &mut diagnostics,
    )?;
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);

    let gray = rgb.channel(0)?;
    let mut colored = Image::<f32, 4>::from_size_val(gray.size(), 0.0)?;
    apply_colormap(&gray, &ColorMap::grayscale(), &mut colored)?;

    assert_eq!(colored.get_pixel(0, 0, 0)?, &0.0);
    for y in 0..3 {
        for x in 0..3 {
            assert_relative_eq!(*colored.get_pixel(x, y, 3)?, 1.0, epsilon = 1e-6);
            assert_relative_eq!(
                *colored.get_pixel(x, y, 1)?,
                *gray.get_pixel(x, y, 0)?,
                epsilon = 1e-6
            );
        }
    }
    Ok(())
}
