use serde::{Deserialize, Serialize};

use scivis_imgproc::parallel::ExecutionStrategy;

/// Options for the iso-surface extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsoSurfaceConfig {
    /// Scalar value the surface passes through.
    pub iso_value: f64,
    /// RGBA color written on every vertex.
    pub color: [f32; 4],
    /// How z-slabs of cells are distributed over threads.
    pub strategy: ExecutionStrategy,
}

impl Default for IsoSurfaceConfig {
    fn default() -> Self {
        Self {
            iso_value: 0.5,
            color: [0.7, 0.7, 0.7, 1.0],
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl IsoSurfaceConfig {
    /// Create a config extracting the surface at `iso_value`.
    pub fn new(iso_value: f64) -> Self {
        Self {
            iso_value,
            ..Default::default()
        }
    }

    /// Create a config whose iso-value sits at `fraction` of a value range.
    ///
    /// # Example
    ///
    /// ```
    /// use scivis_3d::isosurface::IsoSurfaceConfig;
    ///
    /// let config = IsoSurfaceConfig::with_relative_iso(0.25, (-1.0, 3.0));
    /// assert_eq!(config.iso_value, 0.0);
    /// ```
    pub fn with_relative_iso(fraction: f64, (min, max): (f64, f64)) -> Self {
        Self::new(min + fraction * (max - min))
    }

    /// Set the vertex color.
    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Set the execution strategy.
    pub fn strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
