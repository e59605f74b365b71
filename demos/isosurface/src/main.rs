use argh::FromArgs;
use std::path::PathBuf;

use scivis::image::Diagnostic;
use scivis::k3d::generator::HydrogenGenerator;
use scivis::k3d::isosurface::{marching_tetrahedra, IsoSurfaceConfig};

#[derive(FromArgs)]
/// Extract an iso-surface from the hydrogen 3d_z2 orbital density
struct Args {
    /// number of voxels along each axis, between 4 and 256
    #[argh(option, short = 's', default = "16")]
    size: usize,

    /// iso-value as a fraction of the volume value range
    #[argh(option, short = 'i', default = "0.05")]
    iso: f64,

    /// path to a JSON file with the iso-surface config, its iso_value is absolute
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// print the mesh as JSON
    #[argh(switch)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let volume = HydrogenGenerator::new(args.size).generate()?;
    let range = volume.value_range().ok_or("empty volume")?;
    log::info!("density range [{:e}, {:e}]", range.0, range.1);

    let config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => IsoSurfaceConfig::with_relative_iso(args.iso, range),
    };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mesh = marching_tetrahedra(&volume, &config, &mut diagnostics)?;
    for diagnostic in diagnostics {
        log::warn!("{}", diagnostic);
    }

    if args.json {
        println!("{}", serde_json::to_string(&mesh)?);
        return Ok(());
    }

    println!(
        "{}: {} vertices, {} triangles at iso-value {:e}",
        volume.size(),
        mesh.num_vertices(),
        mesh.num_triangles(),
        config.iso_value
    );
    if let Some((lo, hi)) = mesh.bounds() {
        println!("bounds: {} .. {}", lo, hi);
    }

    Ok(())
}
