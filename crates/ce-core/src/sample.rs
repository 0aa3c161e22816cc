use crate::border::{BorderMode, map_index};
use crate::image::ImageView;

/// Rounds to nearest and clamps into `[0, 255]`; NaN maps to 0.
#[inline]
pub fn saturate_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Bilinear sample at pixel-centre coordinates `(x, y)`.
///
/// Panics on an empty image unless `border` is `Constant`.
pub fn sample_bilinear_f32<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    x: f32,
    y: f32,
    border: &BorderMode<f32>,
) -> f32 {
    if img.width() == 0 || img.height() == 0 {
        if let BorderMode::Constant(v) = border {
            return *v;
        }
        panic!("cannot sample an empty image with non-constant border");
    }

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let p00 = sample_at_f32(img, x0, y0, border);
    let p10 = sample_at_f32(img, x0 + 1, y0, border);
    let p01 = sample_at_f32(img, x0, y0 + 1, border);
    let p11 = sample_at_f32(img, x0 + 1, y0 + 1, border);

    let top = p00 * (1.0 - dx) + p10 * dx;
    let bottom = p01 * (1.0 - dx) + p11 * dx;
    top * (1.0 - dy) + bottom * dy
}

fn sample_at_f32<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    x: isize,
    y: isize,
    border: &BorderMode<f32>,
) -> f32 {
    let (Some(xi), Some(yi)) = (
        map_index(x, img.width(), border),
        map_index(y, img.height(), border),
    ) else {
        // Only `Constant` leaves coordinates unmapped on a non-empty image.
        return match border {
            BorderMode::Constant(c) => *c,
            _ => unreachable!("clamp and reflect-101 map every index"),
        };
    };

    // SAFETY: `map_index` returns indices in `[0, len)`.
    unsafe { (*img.get_unchecked(xi, yi)).into() }
}
