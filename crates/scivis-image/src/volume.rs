use crate::error::ImageError;

/// Volume size in voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeSize {
    /// Number of voxels along x.
    pub width: usize,
    /// Number of voxels along y.
    pub height: usize,
    /// Number of voxels along z.
    pub depth: usize,
}

impl VolumeSize {
    /// Create a cubic volume size.
    pub fn cube(n: usize) -> Self {
        Self {
            width: n,
            height: n,
            depth: n,
        }
    }

    /// Total number of voxels.
    pub fn num_voxels(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Flat index of the voxel `(x, y, z)`, x varying fastest.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.width * (y + self.height * z)
    }
}

impl std::fmt::Display for VolumeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSize {{ width: {}, height: {}, depth: {} }}",
            self.width, self.height, self.depth
        )
    }
}

impl From<[usize; 3]> for VolumeSize {
    fn from(size: [usize; 3]) -> Self {
        VolumeSize {
            width: size[0],
            height: size[1],
            depth: size[2],
        }
    }
}

/// Read-only access to a regular 3D grid of scalar samples.
///
/// This is the only view of a volume the iso-surface extraction needs, so any
/// storage able to answer these queries can be meshed without copying.
pub trait Grid3 {
    /// Dimensions of the grid in voxels.
    fn size(&self) -> VolumeSize;

    /// Scalar value at the voxel `(x, y, z)`.
    ///
    /// Callers only query coordinates inside [`Grid3::size`].
    fn value(&self, x: usize, y: usize, z: usize) -> f64;

    /// Stable flat index of the voxel `(x, y, z)`.
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        self.size().index(x, y, z)
    }
}

/// A dense 3D grid of samples stored with x varying fastest, then y, then z.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume<T> {
    size: VolumeSize,
    data: Vec<T>,
}

impl<T> Volume<T> {
    /// Create a new volume from voxel data.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the volume size, an error is returned.
    pub fn new(size: VolumeSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.num_voxels() {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.num_voxels(),
            ));
        }
        Ok(Self { size, data })
    }

    /// Create a new volume filled with `val`.
    pub fn from_size_val(size: VolumeSize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![val; size.num_voxels()],
        }
    }

    /// Create a new volume by evaluating `f(x, y, z)` for every voxel.
    ///
    /// # Examples
    ///
    /// ```
    /// use scivis_image::{Volume, VolumeSize};
    ///
    /// let volume = Volume::from_fn(VolumeSize::cube(2), |x, y, z| (x + y + z) as f32);
    ///
    /// assert_eq!(volume.get(1, 1, 1), Some(&3.0));
    /// assert_eq!(volume.get(2, 0, 0), None);
    /// ```
    pub fn from_fn(size: VolumeSize, f: impl Fn(usize, usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size.num_voxels());
        for z in 0..size.depth {
            for y in 0..size.height {
                for x in 0..size.width {
                    data.push(f(x, y, z));
                }
            }
        }
        Self { size, data }
    }

    /// Get the size of the volume in voxels.
    pub fn size(&self) -> VolumeSize {
        self.size
    }

    /// Get the raw voxel data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw voxel data as mutable.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the voxel at `(x, y, z)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if x >= self.size.width || y >= self.size.height || z >= self.size.depth {
            return None;
        }
        self.data.get(self.size.index(x, y, z))
    }

    /// Minimum and maximum sample value, or `None` for an empty volume.
    pub fn value_range(&self) -> Option<(f64, f64)>
    where
        T: Copy + Into<f64>,
    {
        self.data.iter().fold(None, |acc, &v| {
            let v: f64 = v.into();
            match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            }
        })
    }
}

impl<T> Grid3 for Volume<T>
where
    T: Copy + Into<f64>,
{
    fn size(&self) -> VolumeSize {
        self.size
    }

    #[inline]
    fn value(&self, x: usize, y: usize, z: usize) -> f64 {
        self.data[self.size.index(x, y, z)].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_index_is_x_fastest() {
        let size = VolumeSize::from([3, 4, 5]);
        assert_eq!(size.index(0, 0, 0), 0);
        assert_eq!(size.index(1, 0, 0), 1);
        assert_eq!(size.index(0, 1, 0), 3);
        assert_eq!(size.index(0, 0, 1), 12);
        assert_eq!(size.index(2, 3, 4), size.num_voxels() - 1);
    }

    #[test]
    fn volume_from_fn_layout() {
        let volume = Volume::from_fn([2, 2, 2].into(), |x, y, z| (x + 2 * y + 4 * z) as u8);
        assert_eq!(volume.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(volume.value(1, 1, 1), 7.0);
        assert_eq!(Grid3::index(&volume, 1, 0, 1), 5);
    }

    #[test]
    fn volume_wrong_length() {
        let res = Volume::new(VolumeSize::cube(2), vec![0.0f32; 7]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(7, 8)));
    }

    #[test]
    fn volume_value_range() {
        let volume = Volume::from_fn(VolumeSize::cube(3), |x, y, z| x as f32 - (y * z) as f32);
        assert_eq!(volume.value_range(), Some((-4.0, 2.0)));

        let empty = Volume::<f32>::from_size_val([0, 3, 3].into(), 0.0);
        assert_eq!(empty.value_range(), None);
    }
}
