use std::f64::consts::PI;

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use scivis_image::{ImageError, Volume, VolumeSize};

/// Half extent of the generated volume, in Bohr radii.
const EXTENT: f64 = 18.0;

/// Generates the probability density of the hydrogen 3d_z² orbital on a cube.
///
/// The voxel grid spans `[-18, 18]` Bohr radii on every axis with the nucleus
/// at the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrogenGenerator {
    /// Number of voxels along each axis.
    pub size: usize,
}

impl Default for HydrogenGenerator {
    fn default() -> Self {
        Self { size: 16 }
    }
}

impl HydrogenGenerator {
    /// Smallest supported volume size.
    pub const MIN_SIZE: usize = 4;
    /// Largest supported volume size.
    pub const MAX_SIZE: usize = 256;

    /// Create a generator for a cube of `size` voxels per axis.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Cartesian position of the voxel `(x, y, z)`.
    pub fn id_to_cartesian(&self, x: usize, y: usize, z: usize) -> DVec3 {
        let p = DVec3::new(x as f64, y as f64, z as f64);
        p / (self.size - 1) as f64 * (2.0 * EXTENT) - EXTENT
    }

    /// Convert a cartesian position to spherical `(r, theta, phi)`.
    ///
    /// `theta` is the polar angle from +z, zero at the origin, and `phi` the
    /// azimuth in the xy plane.
    pub fn cartesian_to_spherical(p: DVec3) -> (f64, f64, f64) {
        let r = p.length();
        let theta = if r > 0.0 {
            (p.z / r).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        let phi = p.y.atan2(p.x);
        (r, theta, phi)
    }

    /// Probability density `psi^2` of the 3d_z² orbital at `p`.
    pub fn eval(p: DVec3) -> f64 {
        let (r, theta, _) = Self::cartesian_to_spherical(p);
        let cos_theta = theta.cos();
        let psi = 1.0 / (81.0 * (6.0 * PI).sqrt())
            * r
            * r
            * (-r / 3.0).exp()
            * (3.0 * cos_theta * cos_theta - 1.0);
        psi * psi
    }

    /// Sample the density on the voxel grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is outside `[MIN_SIZE, MAX_SIZE]`.
    pub fn generate(&self) -> Result<Volume<f32>, ImageError> {
        let n = self.size;
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&n) {
            return Err(ImageError::InvalidVolumeSize(n, n, n));
        }

        let mut volume = Volume::from_size_val(VolumeSize::cube(n), 0.0f32);

        volume
            .as_slice_mut()
            .par_chunks_exact_mut(n * n)
            .enumerate()
            .for_each(|(z, slice)| {
                for (i, voxel) in slice.iter_mut().enumerate() {
                    let p = self.id_to_cartesian(i % n, i / n, z);
                    *voxel = Self::eval(p) as f32;
                }
            });

        log::debug!("generated hydrogen density on {}", volume.size());

        Ok(volume)
    }
}
