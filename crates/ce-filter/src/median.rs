//! Square median filter on 8-bit images.
//!
//! Uses a per-row sliding 256-bin histogram: moving one pixel right removes
//! the leaving column and adds the entering one, so the cost per pixel is
//! `O(ksize + 256)` instead of a full window sort. Borders replicate the edge
//! pixel.

use ce_core::{Image, ImageView};

/// Median of each `ksize x ksize` neighbourhood; `ksize` must be odd.
pub fn median_blur_u8(src: &ImageView<'_, u8>, ksize: usize) -> Image<u8> {
    assert!(ksize % 2 == 1, "median kernel size must be odd");

    let (w, h) = src.dims();
    let mut out = Image::new_fill(w, h, 0u8);
    if w == 0 || h == 0 {
        return out;
    }
    if ksize == 1 {
        return src.to_image();
    }

    let r = (ksize / 2) as isize;
    let rank = (ksize * ksize / 2) as u32;
    let clamp_x = |x: isize| x.clamp(0, w as isize - 1) as usize;
    let clamp_y = |y: isize| y.clamp(0, h as isize - 1) as usize;

    let mut hist = [0u32; 256];
    for y in 0..h {
        hist.fill(0);
        let rows: Vec<&[u8]> = (-r..=r)
            .map(|dy| src.row(clamp_y(y as isize + dy)))
            .collect();

        for dx in -r..=r {
            let sx = clamp_x(dx);
            for row in &rows {
                hist[row[sx] as usize] += 1;
            }
        }

        let out_row = out.row_mut(y);
        for x in 0..w {
            if x > 0 {
                let leave = clamp_x(x as isize - 1 - r);
                let enter = clamp_x(x as isize + r);
                for row in &rows {
                    hist[row[leave] as usize] -= 1;
                    hist[row[enter] as usize] += 1;
                }
            }
            out_row[x] = histogram_rank(&hist, rank);
        }
    }

    out
}

/// Smallest value whose cumulative count exceeds `rank`.
fn histogram_rank(hist: &[u32; 256], rank: u32) -> u8 {
    let mut seen = 0u32;
    for (v, &count) in hist.iter().enumerate() {
        seen += count;
        if seen > rank {
            return v as u8;
        }
    }
    255
}

#[cfg(test)]
mod tests {
    use ce_core::{Image, ImageView};

    use super::median_blur_u8;

    fn naive_median(img: &Image<u8>, ksize: usize) -> Image<u8> {
        let (w, h) = img.dims();
        let r = (ksize / 2) as isize;
        let mut out = Image::new_fill(w, h, 0u8);
        for y in 0..h {
            for x in 0..w {
                let mut window = Vec::with_capacity(ksize * ksize);
                for dy in -r..=r {
                    for dx in -r..=r {
                        let sx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                        let sy = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                        window.push(img.data()[sy * w + sx]);
                    }
                }
                window.sort_unstable();
                out.data_mut()[y * w + x] = window[window.len() / 2];
            }
        }
        out
    }

    #[test]
    fn removes_salt_noise() {
        let mut img = Image::new_fill(15, 15, 40u8);
        for &(x, y) in &[(3usize, 3usize), (10, 4), (7, 12)] {
            img.data_mut()[y * 15 + x] = 255;
        }

        let out = median_blur_u8(&img.as_view(), 3);
        assert!(out.data().iter().all(|&v| v == 40));
    }

    #[test]
    fn preserves_step_edge() {
        let data: Vec<u8> = (0..20 * 12)
            .map(|i| if i % 20 < 10 { 10 } else { 200 })
            .collect();
        let img = Image::from_vec(20, 12, data).expect("valid image");

        let out = median_blur_u8(&img.as_view(), 11);
        assert_eq!(out, img);
    }

    #[test]
    fn matches_sorting_reference() {
        let data: Vec<u8> = (0..23 * 17).map(|i| ((i * 37 + i / 5) % 256) as u8).collect();
        let img = Image::from_vec(23, 17, data).expect("valid image");

        for ksize in [3, 5, 11] {
            assert_eq!(
                median_blur_u8(&img.as_view(), ksize),
                naive_median(&img, ksize),
                "ksize {ksize}"
            );
        }
    }

    #[test]
    fn padded_view_matches_contiguous_copy() {
        let (w, h, stride) = (9usize, 6usize, 12usize);
        let data: Vec<u8> = (0..stride * h).map(|i| ((i * 53) % 251) as u8).collect();
        let view = ImageView::from_slice(w, h, stride, &data).expect("valid view");

        let owned = view.to_image();
        assert_eq!(
            median_blur_u8(&view, 5),
            median_blur_u8(&owned.as_view(), 5)
        );
    }
}
