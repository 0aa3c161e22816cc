use ce_core::{Image, ImageView, saturate_u8};
use ce_filter::{invert_u8, median_blur_u8, normalize_minmax_masked_u8, subtract_saturating_u8};
use ce_resample::{resize_bilinear_u8, resize_to_width_u8};
use tracing::{debug, warn};

use crate::edges::amplify_edges;
use crate::mask::check_mask;
use crate::{EnhanceConfig, EnhanceError, ForegroundArithmetic};

/// Illumination correction plus edge amplification of one 8-bit channel.
///
/// The background is estimated by a median over a downscaled copy of the
/// masked channel, the channel is replaced by how far it falls below that
/// estimate, stretched to the full range inside the mask, and finally passed
/// through [`amplify_edges`].
pub fn enhance_channel(
    channel: &ImageView<'_, u8>,
    mask: &ImageView<'_, u8>,
    cfg: &EnhanceConfig,
) -> Result<Image<u8>, EnhanceError> {
    cfg.validate()?;
    let (w, h) = channel.dims();
    if w == 0 || h == 0 {
        return Err(EnhanceError::InvalidDimensions {
            width: w,
            height: h,
            channels: 1,
        });
    }
    check_mask(mask, w, h)?;

    let masked = subtract_saturating_u8(channel, &invert_u8(mask).as_view())?;

    let small = resize_to_width_u8(&masked.as_view(), cfg.target_width);
    let small = median_blur_u8(&small.as_view(), cfg.median_size);
    let background = resize_bilinear_u8(&small.as_view(), w, h);
    debug!(
        width = w,
        height = h,
        small_width = small.width(),
        small_height = small.height(),
        "estimated background"
    );

    let residual = foreground(
        &background.as_view(),
        mask,
        &masked.as_view(),
        cfg.foreground,
    )?;
    if is_flat_inside_mask(&residual.as_view(), mask) {
        warn!("foreground residual is constant inside the mask; normalizing to zero");
    }
    let normalized = normalize_minmax_masked_u8(&residual.as_view(), mask)?;

    amplify_edges(&normalized.as_view(), cfg)
}

/// `sat(background / mask * 255 - channel)`; a zero mask cell gives 0.
fn foreground(
    background: &ImageView<'_, u8>,
    mask: &ImageView<'_, u8>,
    channel: &ImageView<'_, u8>,
    arithmetic: ForegroundArithmetic,
) -> Result<Image<u8>, EnhanceError> {
    let (w, h) = channel.dims();
    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        let rows = background.row(y).iter().zip(mask.row(y)).zip(channel.row(y));
        data.extend(rows.map(|((&bg, &m), &c)| {
            let scaled = match (m, arithmetic) {
                (0, _) => 0.0,
                (_, ForegroundArithmetic::Linear) => bg as f32 * 255.0 / m as f32,
                (_, ForegroundArithmetic::Integer) => {
                    let q = saturate_u8(bg as f32 / m as f32);
                    (q as f32 * 255.0).min(255.0)
                }
            };
            saturate_u8(scaled - c as f32)
        }));
    }
    Ok(Image::from_vec(w, h, data)?)
}

fn is_flat_inside_mask(img: &ImageView<'_, u8>, mask: &ImageView<'_, u8>) -> bool {
    let mut values = (0..img.height()).flat_map(|y| {
        img.row(y)
            .iter()
            .zip(mask.row(y))
            .filter(|&(_, &m)| m != 0)
            .map(|(&v, _)| v)
    });
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}
