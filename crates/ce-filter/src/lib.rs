//! Neighbourhood and pointwise filters on 8-bit single-channel images.
//!
//! All filters correlate with centred kernels on pixel-centre coordinates and
//! saturate their results back to `u8` (round to nearest, clamp to `[0, 255]`).
//! Linear filters work in `f32` internally and use reflect-101 borders; the
//! median filter replicates edge pixels.

pub mod conv1d;
pub mod gaussian;
pub mod kernels;
pub mod laplacian;
pub mod linear;
pub mod median;
pub mod pointwise;

pub use gaussian::gaussian_blur_u8;
pub use kernels::{binomial_kernel, gaussian_kernel, sobel_second_derivative};
pub use laplacian::{LAPLACIAN_APERTURES, laplacian_f32, laplacian_u8};
pub use linear::{Kernel3, filter_3x3_f32, filter_separable_f32};
pub use median::median_blur_u8;
pub use pointwise::{
    invert_u8, normalize_minmax_masked_u8, subtract_saturating_u8, threshold_binary_u8,
};
