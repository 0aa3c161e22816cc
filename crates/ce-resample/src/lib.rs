//! Resizing primitives for 8-bit single-channel images.
//!
//! Coordinates follow the pixel-centre convention: destination pixel `d` on an
//! axis of scale `s = src_len / dst_len` covers the source interval
//! `[d * s, (d + 1) * s)` and has its centre at `(d + 0.5) * s - 0.5`.
//!
//! - [`resize_area_u8`] averages every source pixel the destination footprint
//!   overlaps, weighted by the overlap length. It is the shrinking resize; on
//!   enlargement it falls back to bilinear interpolation.
//! - [`resize_bilinear_u8`] interpolates the 2x2 neighbourhood around the
//!   mapped centre with clamped borders.
//!
//! Results are rounded to nearest and saturated to `u8`.

mod area;
mod bilinear;

pub use area::resize_area_u8;
pub use bilinear::resize_bilinear_u8;

/// Destination size that scales `(src_w, src_h)` to `target_width` while
/// keeping the aspect ratio. Height is rounded and never drops below 1.
///
/// Sources narrower than `target_width` are enlarged, so a 2x100000 input
/// becomes 196x9800000.
pub fn scaled_dims_for_width(src_w: usize, src_h: usize, target_width: usize) -> (usize, usize) {
    if src_w == 0 {
        return (target_width, src_h.max(1));
    }
    let h = (src_h as f64 * target_width as f64 / src_w as f64).round() as usize;
    (target_width, h.max(1))
}

/// Area resize to a fixed width with aspect-preserving height.
pub fn resize_to_width_u8(
    src: &ce_core::ImageView<'_, u8>,
    target_width: usize,
) -> ce_core::Image<u8> {
    let (w, h) = scaled_dims_for_width(src.width(), src.height(), target_width);
    resize_area_u8(src, w, h)
}
