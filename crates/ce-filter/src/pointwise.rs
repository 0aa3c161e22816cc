use ce_core::{Error, Image, ImageView, saturate_u8};

/// `255 - v` for every pixel.
pub fn invert_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    src.to_image().map(|&v| 255 - v)
}

/// `a - b` per pixel, clamped at 0.
pub fn subtract_saturating_u8(
    a: &ImageView<'_, u8>,
    b: &ImageView<'_, u8>,
) -> Result<Image<u8>, Error> {
    ensure_same_dims(a.dims(), b.dims())?;

    let (w, h) = a.dims();
    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        data.extend(
            a.row(y)
                .iter()
                .zip(b.row(y))
                .map(|(&av, &bv)| av.saturating_sub(bv)),
        );
    }
    Image::from_vec(w, h, data)
}

/// Pixels `>= thresh` become `max_value`, the rest 0.
pub fn threshold_binary_u8(src: &ImageView<'_, u8>, thresh: u8, max_value: u8) -> Image<u8> {
    src.to_image()
        .map(|&v| if v >= thresh { max_value } else { 0 })
}

/// Linear min-max stretch into `[0, 255]` over pixels where `mask != 0`.
///
/// Pixels outside the mask keep their value. A constant region maps to 0.
/// An empty region yields an all-zero image.
pub fn normalize_minmax_masked_u8(
    src: &ImageView<'_, u8>,
    mask: &ImageView<'_, u8>,
) -> Result<Image<u8>, Error> {
    ensure_same_dims(src.dims(), mask.dims())?;

    let (w, h) = src.dims();
    let mut lo = u8::MAX;
    let mut hi = u8::MIN;
    let mut any = false;
    for y in 0..h {
        for (&v, &m) in src.row(y).iter().zip(mask.row(y)) {
            if m != 0 {
                lo = lo.min(v);
                hi = hi.max(v);
                any = true;
            }
        }
    }

    if !any {
        return Ok(Image::new_fill(w, h, 0u8));
    }

    let scale = if hi > lo {
        255.0 / (hi - lo) as f32
    } else {
        0.0
    };
    let shift = -(lo as f32) * scale;

    let mut out = src.to_image();
    for y in 0..h {
        let mask_row = mask.row(y);
        for (px, &m) in out.row_mut(y).iter_mut().zip(mask_row) {
            if m != 0 {
                *px = saturate_u8(*px as f32 * scale + shift);
            }
        }
    }
    Ok(out)
}

fn ensure_same_dims(expected: (usize, usize), actual: (usize, usize)) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ce_core::{Error, Image};

    use super::{
        invert_u8, normalize_minmax_masked_u8, subtract_saturating_u8, threshold_binary_u8,
    };

    #[test]
    fn subtract_clamps_at_zero_and_checks_dims() {
        let a = Image::from_vec(3, 1, vec![10u8, 200, 5]).expect("valid image");
        let b = Image::from_vec(3, 1, vec![20u8, 50, 5]).expect("valid image");
        let d = subtract_saturating_u8(&a.as_view(), &b.as_view()).expect("same dims");
        assert_eq!(d.data(), &[0, 150, 0]);

        let c = Image::new_fill(1, 3, 0u8);
        assert_eq!(
            subtract_saturating_u8(&a.as_view(), &c.as_view()).err(),
            Some(Error::DimensionMismatch {
                expected: (3, 1),
                actual: (1, 3)
            })
        );
    }

    #[test]
    fn invert_and_threshold() {
        let img = Image::from_vec(4, 1, vec![0u8, 9, 10, 255]).expect("valid image");
        assert_eq!(invert_u8(&img.as_view()).data(), &[255, 246, 245, 0]);
        assert_eq!(
            threshold_binary_u8(&img.as_view(), 10, 255).data(),
            &[0, 0, 255, 255]
        );
    }

    #[test]
    fn normalize_stretches_masked_region_only() {
        let img = Image::from_vec(4, 1, vec![50u8, 100, 150, 7]).expect("valid image");
        let mask = Image::from_vec(4, 1, vec![255u8, 255, 255, 0]).expect("valid image");

        let out = normalize_minmax_masked_u8(&img.as_view(), &mask.as_view()).expect("same dims");
        assert_eq!(out.data(), &[0, 128, 255, 7]);
    }

    #[test]
    fn normalize_degenerate_regions_saturate_to_zero() {
        let flat = Image::new_fill(3, 3, 128u8);
        let full = Image::new_fill(3, 3, 255u8);
        let out = normalize_minmax_masked_u8(&flat.as_view(), &full.as_view()).expect("same dims");
        assert!(out.data().iter().all(|&v| v == 0));

        let empty = Image::new_fill(3, 3, 0u8);
        let out = normalize_minmax_masked_u8(&flat.as_view(), &empty.as_view()).expect("same dims");
        assert!(out.data().iter().all(|&v| v == 0));
    }
}
