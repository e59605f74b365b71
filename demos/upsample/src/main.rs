use argh::FromArgs;
use std::path::PathBuf;

use glam::Vec4;
use scivis::image::{Image, ImageSize, LogSink};
use scivis::imgproc::colormap::{apply_colormap, ColorMap};
use scivis::imgproc::interpolation::InterpolationMode;
use scivis::imgproc::resize::{upsample, ResampleConfig};

#[derive(FromArgs)]
/// Upsample a synthetic image and map it to colors
struct Args {
    /// width of the source image
    #[argh(option, default = "8")]
    src_width: usize,

    /// height of the source image
    #[argh(option, default = "8")]
    src_height: usize,

    /// width of the upsampled image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the upsampled image
    #[argh(option, default = "32")]
    height: usize,

    /// interpolation mode: nearest, bilinear, biquadratic or barycentric
    #[argh(option, short = 'm')]
    mode: Option<InterpolationMode>,

    /// path to a JSON file with the resample config
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ResampleConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    log::info!("resample config: {}", serde_json::to_string(&config)?);

    // smooth bumps in [0, 1]
    let src_size = ImageSize {
        width: args.src_width,
        height: args.src_height,
    };
    let src = Image::<f32, 1>::from_fn(src_size, |x, y| {
        let (u, v) = (x as f32 * 0.9, y as f32 * 0.6);
        [0.5 + 0.5 * u.sin() * v.cos()]
    });

    let new_size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let upsampled = upsample(&src, new_size, &config, &mut LogSink)?;

    let cmap = ColorMap::new(vec![
        Vec4::new(0.23, 0.30, 0.75, 1.0),
        Vec4::new(0.87, 0.87, 0.87, 1.0),
        Vec4::new(0.71, 0.02, 0.15, 1.0),
    ]);
    let mut colored = Image::<f32, 4>::from_size_val(new_size, 0.0)?;
    apply_colormap(&upsampled, &cmap, &mut colored)?;

    let values = upsampled.as_slice();
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let mean = values.iter().sum::<f32>() / values.len().max(1) as f32;

    println!(
        "{} -> {} ({}): min {:.3} max {:.3} mean {:.3}",
        src.size(),
        upsampled.size(),
        config.mode,
        min,
        max,
        mean
    );

    print_preview(&upsampled);

    let mean_red = colored.as_slice().chunks_exact(4).map(|px| px[0]).sum::<f32>()
        / new_size.area().max(1) as f32;
    println!("mean red channel after color mapping: {:.3}", mean_red);

    Ok(())
}

fn print_preview(image: &Image<f32, 1>) {
    const RAMP: &[u8] = b" .:-=+*#%@";
    for row in image.as_slice().chunks_exact(image.width().max(1)) {
        let line: String = row
            .iter()
            .map(|&v| {
                let i = (v.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[i] as char
            })
            .collect();
        println!("{line}");
    }
}
