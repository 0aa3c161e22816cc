use ce_core::{BorderMode, Image, ImageView, saturate_u8, to_f32};

use crate::kernels::gaussian_kernel;
use crate::linear::filter_separable_f32;

/// Gaussian blur of an 8-bit image with a square `ksize x ksize` kernel.
///
/// Borders use reflect-101. `ksize` must be odd; `ksize == 1` copies the input.
pub fn gaussian_blur_u8(src: &ImageView<'_, u8>, ksize: usize, sigma: f32) -> Image<u8> {
    let g = gaussian_kernel(ksize, sigma);
    let blurred = filter_separable_f32(&to_f32(src), &g, &g, &BorderMode::Reflect101);
    blurred.map(|&v| saturate_u8(v))
}
