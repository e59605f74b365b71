/// An error type for the image and volume grids.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}, {1}) and ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the volume size is not valid.
    #[error("Invalid volume size ({0}, {1}, {2})")]
    InvalidVolumeSize(usize, usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),
}
