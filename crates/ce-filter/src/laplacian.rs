//! Second-derivative (Laplacian) response of an 8-bit image.
//!
//! Aperture 1 uses the 4-neighbour stencil, aperture 3 the diagonal-weighted
//! 3x3 stencil, larger apertures sum the separable Sobel second derivatives
//! `d2x + d2y`. The response is multiplied by `scale` and saturated to `u8`,
//! so negative curvature is clipped to zero.

use ce_core::{BorderMode, Image, ImageView, saturate_u8, to_f32};

use crate::kernels::sobel_second_derivative;
use crate::linear::{Kernel3, filter_3x3_f32, filter_separable_f32};

const LAPLACE_K1: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
const LAPLACE_K3: Kernel3 = [[2.0, 0.0, 2.0], [0.0, -8.0, 0.0], [2.0, 0.0, 2.0]];

/// Apertures accepted by [`laplacian_u8`].
pub const LAPLACIAN_APERTURES: [usize; 4] = [1, 3, 5, 7];

pub fn laplacian_f32(src: &ImageView<'_, u8>, ksize: usize) -> Image<f32> {
    assert!(
        LAPLACIAN_APERTURES.contains(&ksize),
        "laplacian aperture must be 1, 3, 5 or 7"
    );

    let img = to_f32(src);
    let border = BorderMode::Reflect101;
    match ksize {
        1 => filter_3x3_f32(&img, &LAPLACE_K1, &border),
        3 => filter_3x3_f32(&img, &LAPLACE_K3, &border),
        _ => {
            let (d2, smooth) = sobel_second_derivative(ksize);
            let mut acc = filter_separable_f32(&img, &d2, &smooth, &border);
            let dyy = filter_separable_f32(&img, &smooth, &d2, &border);
            for (a, &b) in acc.data_mut().iter_mut().zip(dyy.data()) {
                *a += b;
            }
            acc
        }
    }
}

pub fn laplacian_u8(src: &ImageView<'_, u8>, ksize: usize, scale: f32) -> Image<u8> {
    laplacian_f32(src, ksize).map(|&v| saturate_u8(v * scale))
}

#[cfg(test)]
mod tests {
    use ce_core::Image;

    use super::{laplacian_f32, laplacian_u8};

    #[test]
    fn flat_and_linear_ramps_have_zero_response() {
        let flat = Image::new_fill(8, 8, 90u8);
        assert!(laplacian_u8(&flat.as_view(), 5, 1.0).data().iter().all(|&v| v == 0));

        let ramp: Vec<u8> = (0..64).map(|i| ((i % 8) * 10) as u8).collect();
        let ramp = Image::from_vec(8, 8, ramp).expect("valid image");
        let resp = laplacian_f32(&ramp.as_view(), 5);
        // Interior columns see a linear ramp; reflect-101 folds the ends.
        for y in 0..8 {
            for x in 2..6 {
                assert!(resp.data()[y * 8 + x].abs() < 1e-3);
            }
        }
    }

    #[test]
    fn dark_dot_on_bright_field_gives_positive_centre() {
        let mut img = Image::new_fill(9, 9, 200u8);
        img.data_mut()[4 * 9 + 4] = 100;

        for ksize in [1, 3, 5, 7] {
            let resp = laplacian_f32(&img.as_view(), ksize);
            assert!(resp.data()[4 * 9 + 4] > 0.0, "ksize {ksize}");
        }

        // A bright dot is a negative response and clips to zero.
        let mut bright = Image::new_fill(9, 9, 0u8);
        bright.data_mut()[4 * 9 + 4] = 100;
        let out = laplacian_u8(&bright.as_view(), 5, 0.3);
        assert_eq!(out.data()[4 * 9 + 4], 0);
    }
}
