use ce_core::{Image, ImageView};

use crate::EnhanceError;

/// Flat illumination reference: every cell is 255.
pub fn build_illumination_mask(width: usize, height: usize) -> Image<u8> {
    Image::new_fill(width, height, 255u8)
}

/// Checks a caller-supplied mask against the channel it will divide.
pub(crate) fn check_mask(
    mask: &ImageView<'_, u8>,
    width: usize,
    height: usize,
) -> Result<(), EnhanceError> {
    if mask.dims() != (width, height) {
        return Err(EnhanceError::InvalidDimensions {
            width: mask.width(),
            height: mask.height(),
            channels: 1,
        });
    }
    let any_set = (0..mask.height()).any(|y| mask.row(y).iter().any(|&m| m != 0));
    if !any_set {
        return Err(EnhanceError::DegenerateMask);
    }
    Ok(())
}
