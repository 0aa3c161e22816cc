use ce_core::{BorderMode, Image, ImageView, sample_bilinear_f32, saturate_u8};

/// Bilinear resize with pixel-centre alignment and clamped borders.
pub fn resize_bilinear_u8(src: &ImageView<'_, u8>, dst_w: usize, dst_h: usize) -> Image<u8> {
    let mut dst = Image::new_fill(dst_w, dst_h, 0u8);
    if src.width() == 0 || src.height() == 0 {
        return dst;
    }

    let sx = src.width() as f32 / dst_w.max(1) as f32;
    let sy = src.height() as f32 / dst_h.max(1) as f32;
    let border = BorderMode::Clamp;

    for dy in 0..dst_h {
        let y = (dy as f32 + 0.5) * sy - 0.5;
        for (dx, out) in dst.row_mut(dy).iter_mut().enumerate() {
            let x = (dx as f32 + 0.5) * sx - 0.5;
            *out = saturate_u8(sample_bilinear_f32(src, x, y, &border));
        }
    }
    dst
}
