use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::interpolation::linear;
use crate::parallel;
use scivis_image::{Image, ImageError};

/// A piecewise linear transfer function from scalars in `[0, 1]` to RGBA colors.
///
/// The base colors are spread evenly over `[0, 1]`: with `N` colors the range is
/// split in `N - 1` segments and each segment blends its two end colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    colors: Vec<Vec4>,
}

impl ColorMap {
    /// Create a color map from its ordered base colors.
    pub fn new(colors: Vec<Vec4>) -> Self {
        Self { colors }
    }

    /// Create a color map from RGBA arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::Vec4;
    /// use scivis_imgproc::colormap::ColorMap;
    ///
    /// let cmap = ColorMap::from_rgba(&[[0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0]]);
    ///
    /// assert_eq!(cmap.sample(0.5), Vec4::new(0.5, 0.0, 0.5, 1.0));
    /// ```
    pub fn from_rgba(colors: &[[f32; 4]]) -> Self {
        Self::new(colors.iter().copied().map(Vec4::from_array).collect())
    }

    /// Black to white.
    pub fn grayscale() -> Self {
        Self::new(vec![Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::ONE])
    }

    /// The ordered base colors.
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Number of base colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the map has no base colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append a base color at the end of the range.
    pub fn push(&mut self, color: Vec4) {
        self.colors.push(color);
    }

    /// Remove all base colors.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Map a scalar to a color.
    ///
    /// Without base colors the scalar itself is returned on every component,
    /// with a single base color that color is returned for every input.
    /// Inputs outside `[0, 1]` take the color of the nearest end.
    pub fn sample(&self, t: f32) -> Vec4 {
        let (first, last) = match (self.colors.first(), self.colors.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Vec4::splat(t),
        };

        if self.colors.len() == 1 || t <= 0.0 {
            return first;
        }
        if t >= 1.0 {
            return last;
        }

        let segments = self.colors.len() - 1;
        let pos = t * segments as f32;
        let i = (pos.floor() as usize).min(segments - 1);

        linear(self.colors[i], self.colors[i + 1], pos - i as f32)
    }
}

/// Map a single channel image to RGBA through a color map.
///
/// # Arguments
///
/// * `src` - The scalar image, values are expected in `[0, 1]`.
/// * `cmap` - The color map.
/// * `dst` - The output RGBA image, with the same size as `src`.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` differ.
pub fn apply_colormap(
    src: &Image<f32, 1>,
    cmap: &ColorMap,
    dst: &mut Image<f32, 4>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&cmap.sample(src_pixel[0]).to_array());
    });

    Ok(())
}
