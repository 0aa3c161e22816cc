use std::time::Instant;

use ce_core::{ChannelPlanes, Image, ImageView};
use ce_resample::scaled_dims_for_width;
use tracing::{debug, instrument, warn};

use crate::channel::enhance_channel;
use crate::mask::{build_illumination_mask, check_mask};
use crate::{EnhanceConfig, EnhanceError};

/// Enhances an interleaved colour image into a single grayscale plane.
pub fn process(image: &Image<[u8; 3]>, cfg: &EnhanceConfig) -> Result<Image<u8>, EnhanceError> {
    let mask = build_illumination_mask(image.width(), image.height());
    process_with_mask(image, &mask.as_view(), cfg)
}

/// [`process`] with a caller-supplied illumination mask.
pub fn process_with_mask(
    image: &Image<[u8; 3]>,
    mask: &ImageView<'_, u8>,
    cfg: &EnhanceConfig,
) -> Result<Image<u8>, EnhanceError> {
    check_color_dims(image.width(), image.height(), 3)?;
    let planes = ChannelPlanes::split(image, cfg.channel_order);
    let enhanced = enhance_planes(&planes, mask, cfg)?;
    Ok(to_grayscale(&enhanced))
}

/// [`process`] on a packed `width * height * channels` byte buffer.
///
/// Only three-channel buffers are accepted; the slot layout comes from
/// [`EnhanceConfig::channel_order`].
pub fn process_interleaved(
    width: usize,
    height: usize,
    channels: usize,
    bytes: &[u8],
    cfg: &EnhanceConfig,
) -> Result<Image<u8>, EnhanceError> {
    check_color_dims(width, height, channels)?;
    let planes = ChannelPlanes::from_interleaved_bytes(width, height, bytes, cfg.channel_order)?;
    let mask = build_illumination_mask(width, height);
    let enhanced = enhance_planes(&planes, &mask.as_view(), cfg)?;
    Ok(to_grayscale(&enhanced))
}

/// Enhances each plane independently and returns them before the merge.
pub fn process_planes(
    planes: &ChannelPlanes,
    cfg: &EnhanceConfig,
) -> Result<ChannelPlanes, EnhanceError> {
    check_color_dims(planes.width(), planes.height(), 3)?;
    let mask = build_illumination_mask(planes.width(), planes.height());
    enhance_planes(planes, &mask.as_view(), cfg)
}

/// Luma `0.299 R + 0.587 G + 0.114 B` in 14-bit fixed point, rounded.
pub fn to_grayscale(planes: &ChannelPlanes) -> Image<u8> {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;

    let mut out = Image::new_fill(planes.width(), planes.height(), 0u8);
    let sources = planes
        .red
        .data()
        .iter()
        .zip(planes.green.data())
        .zip(planes.blue.data());
    for (px, ((&r, &g), &b)) in out.data_mut().iter_mut().zip(sources) {
        let y = (r as u32 * R + g as u32 * G + b as u32 * B + (1 << (SHIFT - 1))) >> SHIFT;
        *px = y as u8;
    }
    out
}

#[instrument(level = "debug", skip_all, fields(width = planes.width(), height = planes.height()))]
fn enhance_planes(
    planes: &ChannelPlanes,
    mask: &ImageView<'_, u8>,
    cfg: &EnhanceConfig,
) -> Result<ChannelPlanes, EnhanceError> {
    cfg.validate()?;
    check_mask(mask, planes.width(), planes.height())?;
    if planes.width() < cfg.median_size {
        warn!(
            width = planes.width(),
            median_size = cfg.median_size,
            "image is narrower than the median window; output is degenerate"
        );
    }
    let dims = (planes.width(), planes.height());
    if let Some((small_width, small_height)) = enlarged_background_dims(dims, cfg) {
        warn!(
            width = dims.0,
            height = dims.1,
            small_width,
            small_height,
            "image is narrower than target_width; the background grid is upscaled"
        );
    }

    let started = Instant::now();
    let run = |plane: &Image<u8>| enhance_channel(&plane.as_view(), mask, cfg);
    let (red, (green, blue)) = if cfg.parallel {
        rayon::join(
            || run(&planes.red),
            || rayon::join(|| run(&planes.green), || run(&planes.blue)),
        )
    } else {
        (run(&planes.red), (run(&planes.green), run(&planes.blue)))
    };

    // First failure in channel order wins.
    let enhanced = ChannelPlanes::new(red?, green?, blue?)?;
    debug!(
        parallel = cfg.parallel,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "enhanced channels"
    );
    Ok(enhanced)
}

/// Background grid size when it is larger than the input, which happens for
/// inputs narrower than `target_width`. A tall, narrow input grows the grid
/// height by the same factor, so memory scales with `height * target_width`.
fn enlarged_background_dims(
    (width, height): (usize, usize),
    cfg: &EnhanceConfig,
) -> Option<(usize, usize)> {
    (width < cfg.target_width).then(|| scaled_dims_for_width(width, height, cfg.target_width))
}

fn check_color_dims(width: usize, height: usize, channels: usize) -> Result<(), EnhanceError> {
    if width == 0 || height == 0 || channels != 3 {
        return Err(EnhanceError::InvalidDimensions {
            width,
            height,
            channels,
        });
    }
    Ok(())
}
