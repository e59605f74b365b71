use glam::{Vec3, Vec4};
use rayon::prelude::*;

use super::config::IsoSurfaceConfig;
use super::tables::{EdgeTriangle, CASE_TABLE, CELL_CORNERS, TETRAHEDRA};
use crate::error::IsoSurfaceError;
use crate::mesh::{MeshBuilder, TriangleMesh};
use scivis_image::{Diagnostic, DiagnosticSink, Grid3, VolumeSize};
use scivis_imgproc::interpolation::linear;

/// A grid sample with its normalized position and flat index.
#[derive(Debug, Clone, Copy)]
struct Voxel {
    pos: Vec3,
    value: f64,
    index: usize,
}

/// Where the surface crosses the edge between two voxels.
#[derive(Debug, Clone, Copy)]
struct EdgeCrossing {
    edge: (usize, usize),
    position: Vec3,
}

/// Triangles found in one z-slab of cells.
#[derive(Debug, Default)]
struct Slab {
    triangles: Vec<[EdgeCrossing; 3]>,
    skipped: usize,
}

/// Extract the iso-surface of a volume with marching tetrahedra.
///
/// Every cell of the grid is split into six tetrahedra and each tetrahedron
/// emits up to two triangles where the linearly interpolated field crosses
/// `config.iso_value`. A voxel counts as below the surface when its value is
/// strictly less than the iso-value. Vertex positions are normalized to
/// `[0, 1]` per axis, vertices on the same voxel edge are shared, and normals
/// point towards the side above the iso-value.
///
/// Triangles whose edge crossing cannot be computed (equal or non finite
/// endpoint values) are skipped and reported once as a warning, as is an
/// iso-value outside the value range of the grid.
///
/// # Arguments
///
/// * `grid` - The scalar volume, with at least two voxels along every axis to
///   contain a cell.
/// * `config` - Iso-value, vertex color and execution strategy.
/// * `diagnostics` - Receives the recoverable problems found on the way.
///
/// # Returns
///
/// The triangle mesh, empty when no cell crosses the surface.
///
/// # Errors
///
/// Returns an error if the execution strategy is invalid or a degenerate
/// triangle would be emitted.
///
/// # Example
///
/// ```
/// use scivis_3d::isosurface::{marching_tetrahedra, IsoSurfaceConfig};
/// use scivis_image::{LogSink, Volume, VolumeSize};
///
/// // a single cell with one corner below the surface
/// let volume = Volume::from_fn(VolumeSize::cube(2), |x, y, z| (x + y + z).min(1) as f32);
///
/// let mesh = marching_tetrahedra(&volume, &IsoSurfaceConfig::new(0.5), &mut LogSink).unwrap();
///
/// assert_eq!(mesh.num_triangles(), 2);
/// assert_eq!(mesh.num_vertices(), 4);
/// ```
pub fn marching_tetrahedra<G>(
    grid: &G,
    config: &IsoSurfaceConfig,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<TriangleMesh, IsoSurfaceError>
where
    G: Grid3 + Sync,
{
    let size = grid.size();
    if size.width < 2 || size.height < 2 || size.depth < 2 {
        log::debug!("{} has no cells, nothing to extract", size);
        return Ok(TriangleMesh::new());
    }

    let iso = config.iso_value;
    if let Some((min, max)) = grid_value_range(grid) {
        if !(min..=max).contains(&iso) {
            diagnostics.report(Diagnostic::warning(format!(
                "iso-value {} is outside the value range [{}, {}]",
                iso, min, max
            )));
        }
    }

    let num_slabs = size.depth - 1;
    let slabs: Vec<Slab> = if config.strategy.is_serial() {
        (0..num_slabs)
            .map(|z| process_slab(grid, size, z, iso))
            .collect()
    } else {
        config.strategy.install(|| {
            (0..num_slabs)
                .into_par_iter()
                .map(|z| process_slab(grid, size, z, iso))
                .collect()
        })?
    };

    // slabs are merged in z order so the indices match a serial pass
    let mut builder = MeshBuilder::new(Vec4::from_array(config.color));
    let mut skipped = 0;
    for slab in slabs {
        skipped += slab.skipped;
        for triangle in slab.triangles {
            let mut indices = [0u32; 3];
            for (index, crossing) in indices.iter_mut().zip(triangle) {
                let (i, j) = crossing.edge;
                *index = builder.vertex_on_edge(i, j, crossing.position)?;
            }
            builder.add_triangle(indices)?;
        }
    }

    if skipped > 0 {
        diagnostics.report(Diagnostic::warning(format!(
            "skipped {} triangles with an undefined edge crossing",
            skipped
        )));
    }

    let mesh = builder.build();

    log::debug!(
        "extracted {} vertices and {} triangles at iso-value {} from {}",
        mesh.num_vertices(),
        mesh.num_triangles(),
        iso,
        size
    );

    Ok(mesh)
}

fn grid_value_range<G: Grid3>(grid: &G) -> Option<(f64, f64)> {
    let size = grid.size();
    let mut range: Option<(f64, f64)> = None;
    for z in 0..size.depth {
        for y in 0..size.height {
            for x in 0..size.width {
                let v = grid.value(x, y, z);
                range = Some(match range {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        }
    }
    range
}

fn process_slab<G: Grid3>(grid: &G, size: VolumeSize, z: usize, iso: f64) -> Slab {
    let mut slab = Slab::default();

    for y in 0..size.height - 1 {
        for x in 0..size.width - 1 {
            let cell = build_cell(grid, size, x, y, z);

            for tet in TETRAHEDRA {
                let tetra = tet.map(|k| cell[k]);
                for triangle in CASE_TABLE[case_index(&tetra, iso)] {
                    match triangle_crossings(&tetra, triangle, iso) {
                        Some(crossings) => slab.triangles.push(crossings),
                        None => slab.skipped += 1,
                    }
                }
            }
        }
    }

    slab
}

fn build_cell<G: Grid3>(grid: &G, size: VolumeSize, x: usize, y: usize, z: usize) -> [Voxel; 8] {
    let normalized = |coord: usize, dim: usize| coord as f32 / (dim - 1) as f32;

    CELL_CORNERS.map(|[dx, dy, dz]| {
        let (vx, vy, vz) = (x + dx, y + dy, z + dz);
        Voxel {
            pos: Vec3::new(
                normalized(vx, size.width),
                normalized(vy, size.height),
                normalized(vz, size.depth),
            ),
            value: grid.value(vx, vy, vz),
            index: grid.index(vx, vy, vz),
        }
    })
}

fn case_index(tetra: &[Voxel; 4], iso: f64) -> usize {
    tetra
        .iter()
        .enumerate()
        .filter(|(_, voxel)| voxel.value < iso)
        .fold(0, |case, (k, _)| case | (1 << k))
}

fn triangle_crossings(
    tetra: &[Voxel; 4],
    triangle: &EdgeTriangle,
    iso: f64,
) -> Option<[EdgeCrossing; 3]> {
    let [a, b, c] = triangle.map(|(i, j)| edge_crossing(&tetra[i], &tetra[j], iso));
    Some([a?, b?, c?])
}

fn edge_crossing(a: &Voxel, b: &Voxel, iso: f64) -> Option<EdgeCrossing> {
    let (lo, hi) = if a.value <= b.value { (a, b) } else { (b, a) };

    let denom = hi.value - lo.value;
    if denom == 0.0 {
        return None;
    }

    let t = (iso - lo.value) / denom;
    if !t.is_finite() {
        return None;
    }

    Some(EdgeCrossing {
        edge: (a.index, b.index),
        position: linear(lo.pos, hi.pos, t as f32),
    })
}
