use ce_core::{Image, ImageView, saturate_u8};

use crate::bilinear::resize_bilinear_u8;

/// One source tap of an area footprint: index and normalized weight.
#[derive(Clone, Copy, Debug)]
struct Tap {
    index: usize,
    weight: f32,
}

/// Area-averaging resize to `(dst_w, dst_h)`.
///
/// Used when both axes shrink or stay the same; any enlarging axis switches
/// the whole call to [`resize_bilinear_u8`]. An empty source or destination
/// yields a zero-filled image of the requested size.
pub fn resize_area_u8(src: &ImageView<'_, u8>, dst_w: usize, dst_h: usize) -> Image<u8> {
    if dst_w == 0 || dst_h == 0 || src.width() == 0 || src.height() == 0 {
        return Image::new_fill(dst_w, dst_h, 0u8);
    }
    if dst_w > src.width() || dst_h > src.height() {
        return resize_bilinear_u8(src, dst_w, dst_h);
    }

    let x_taps = area_taps(src.width(), dst_w);
    let y_taps = area_taps(src.height(), dst_h);

    // Horizontal pass: every source row collapses to `dst_w` samples.
    let mut rows = vec![0.0f32; src.height() * dst_w];
    for (y, dst_row) in rows.chunks_exact_mut(dst_w).enumerate() {
        let src_row = src.row(y);
        for (out, taps) in dst_row.iter_mut().zip(&x_taps) {
            *out = taps
                .iter()
                .map(|t| src_row[t.index] as f32 * t.weight)
                .sum();
        }
    }

    let mut dst = Image::new_fill(dst_w, dst_h, 0u8);
    for (dy, taps) in y_taps.iter().enumerate() {
        let dst_row = dst.row_mut(dy);
        for (dx, out) in dst_row.iter_mut().enumerate() {
            let acc: f32 = taps
                .iter()
                .map(|t| rows[t.index * dst_w + dx] * t.weight)
                .sum();
            *out = saturate_u8(acc);
        }
    }
    dst
}

/// Per destination index, the source pixels its footprint overlaps.
fn area_taps(src_len: usize, dst_len: usize) -> Vec<Vec<Tap>> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = ((d + 1) as f64 * scale).min(src_len as f64);
            let span = end - start;

            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);
            (first..last)
                .filter_map(|i| {
                    let overlap = end.min((i + 1) as f64) - start.max(i as f64);
                    (overlap > 1e-9).then(|| Tap {
                        index: i,
                        weight: (overlap / span) as f32,
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ce_core::Image;

    use super::{area_taps, resize_area_u8};

    #[test]
    fn taps_cover_source_once() {
        for (src, dst) in [(10, 3), (640, 196), (7, 7), (5, 2)] {
            let taps = area_taps(src, dst);
            assert_eq!(taps.len(), dst);

            let mut coverage = vec![0.0f64; src];
            for t in taps.iter().flatten() {
                coverage[t.index] += t.weight as f64 * src as f64 / dst as f64;
            }
            for c in coverage {
                assert!((c - 1.0).abs() < 1e-4, "src {src} dst {dst}: {c}");
            }
        }
    }

    #[test]
    fn constant_image_stays_constant() {
        let img = Image::new_fill(200, 150, 93u8);
        let out = resize_area_u8(&img.as_view(), 196, 147);
        assert_eq!(out.dims(), (196, 147));
        assert!(out.data().iter().all(|&v| v == 93));
    }

    #[test]
    fn integer_factor_is_block_mean() {
        let img = Image::from_vec(4, 2, vec![0u8, 10, 20, 40, 2, 12, 30, 50]).expect("valid image");
        let out = resize_area_u8(&img.as_view(), 2, 1);
        assert_eq!(out.data(), &[6, 35]);
    }

    #[test]
    fn fractional_factor_weights_partial_overlap() {
        // Scale 1.5: first output covers pixel 0 fully and half of pixel 1.
        let img = Image::from_vec(3, 1, vec![0u8, 90, 180]).expect("valid image");
        let out = resize_area_u8(&img.as_view(), 2, 1);
        assert_eq!(out.data(), &[30, 150]);
    }

    #[test]
    fn equal_size_is_identity() {
        let data: Vec<u8> = (0..35).map(|i| (i * 7) as u8).collect();
        let img = Image::from_vec(7, 5, data).expect("valid image");
        let out = resize_area_u8(&img.as_view(), 7, 5);
        assert_eq!(out.data(), img.data());
    }
}
