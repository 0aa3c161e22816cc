use ce_core::{BorderMode, Image, map_index};

use crate::conv1d::convolve_f32;

pub type Kernel3 = [[f32; 3]; 3];

/// Applies `kx` along rows then `ky` along columns.
///
/// Both kernels must have odd length. The intermediate stays in `f32`, so
/// separable results match the equivalent full 2D correlation.
pub fn filter_separable_f32(
    src: &Image<f32>,
    kx: &[f32],
    ky: &[f32],
    border: &BorderMode<f32>,
) -> Image<f32> {
    assert!(kx.len() % 2 == 1, "horizontal kernel length must be odd");
    assert!(ky.len() % 2 == 1, "vertical kernel length must be odd");

    let (w, h) = src.dims();
    let mut tmp = Image::new_fill(w, h, 0.0f32);
    if w == 0 || h == 0 {
        return tmp;
    }

    for y in 0..h {
        convolve_f32(src.row(y), kx, kx.len() / 2, border, tmp.row_mut(y));
    }

    let mut out = Image::new_fill(w, h, 0.0f32);
    let mut column = vec![0.0f32; h];
    let mut filtered = vec![0.0f32; h];
    for x in 0..w {
        for (y, c) in column.iter_mut().enumerate() {
            *c = tmp.data()[y * w + x];
        }
        convolve_f32(&column, ky, ky.len() / 2, border, &mut filtered);
        for (y, &v) in filtered.iter().enumerate() {
            out.data_mut()[y * w + x] = v;
        }
    }

    out
}

/// Direct 3x3 correlation for kernels that are not separable.
pub fn filter_3x3_f32(src: &Image<f32>, kernel: &Kernel3, border: &BorderMode<f32>) -> Image<f32> {
    let (w, h) = src.dims();
    let mut out = Image::new_fill(w, h, 0.0f32);

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ky, k_row) in kernel.iter().enumerate() {
                for (kx, &kv) in k_row.iter().enumerate() {
                    if kv == 0.0 {
                        continue;
                    }
                    let sx = map_index(x as isize + kx as isize - 1, w, border);
                    let sy = map_index(y as isize + ky as isize - 1, h, border);
                    let v = match (sx, sy, border) {
                        (Some(sx), Some(sy), _) => src.data()[sy * w + sx],
                        (_, _, BorderMode::Constant(c)) => *c,
                        _ => unreachable!("non-constant borders map every index"),
                    };
                    acc += v * kv;
                }
            }
            out.data_mut()[y * w + x] = acc;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use ce_core::{BorderMode, Image};

    use super::{filter_3x3_f32, filter_separable_f32};

    #[test]
    fn separable_box_matches_direct_3x3() {
        let data: Vec<f32> = (0..20).map(|i| ((i * 7) % 11) as f32).collect();
        let img = Image::from_vec(5, 4, data).expect("valid image");
        let ones = [1.0f32; 3];
        let border = BorderMode::Reflect101;

        let sep = filter_separable_f32(&img, &ones, &ones, &border);
        let direct = filter_3x3_f32(&img, &[[1.0; 3]; 3], &border);

        for (a, b) in sep.data().iter().zip(direct.data()) {
            assert!((a - b).abs() < 1e-4, "{a} vs {b}");
        }
    }

    #[test]
    fn separable_on_empty_image_is_empty() {
        let img = Image::new_fill(0, 3, 0.0f32);
        let out = filter_separable_f32(&img, &[1.0], &[1.0], &BorderMode::Clamp);
        assert!(out.is_empty());
    }
}
