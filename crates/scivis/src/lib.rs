#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use scivis_image as image;

#[doc(inline)]
pub use scivis_imgproc as imgproc;

#[doc(inline)]
pub use scivis_3d as k3d;
