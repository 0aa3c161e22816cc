use ce_contour::{ContourApproximation, ContourId, ContourSet, fill_contour, find_contours};
use ce_core::{Image, ImageView};
use ce_filter::{gaussian_blur_u8, laplacian_u8, subtract_saturating_u8, threshold_binary_u8};
use tracing::trace;

use crate::{EnhanceConfig, EnhanceError};

/// Contours that neither enclose a hole nor are one.
pub fn select_solid_contours(set: &ContourSet) -> Vec<ContourId> {
    set.hierarchy
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.first_child.is_none() && rec.parent.is_none())
        .map(|(id, _)| id)
        .collect()
}

/// Gaussian blur followed by the scaled Laplacian, saturated to `u8`.
pub fn laplacian_of_gaussian(
    image: &ImageView<'_, u8>,
    cfg: &EnhanceConfig,
) -> Result<Image<u8>, EnhanceError> {
    cfg.validate()?;
    let blurred = gaussian_blur_u8(image, cfg.laplacian_blur_size, cfg.gaussian_sigma);
    Ok(laplacian_u8(
        &blurred.as_view(),
        cfg.laplacian_ksize,
        cfg.laplacian_scale,
    ))
}

/// Darkens ring-like edges of `image`.
///
/// Edges whose thresholded outline is a solid blob are cleared from the edge
/// map first, so only edges enclosing a hole (or sitting in one) are
/// subtracted.
pub fn amplify_edges(
    image: &ImageView<'_, u8>,
    cfg: &EnhanceConfig,
) -> Result<Image<u8>, EnhanceError> {
    let mut edge_map = laplacian_of_gaussian(image, cfg)?;

    let binary = threshold_binary_u8(&edge_map.as_view(), cfg.edge_threshold, 255);
    let contours = find_contours(&binary.as_view(), ContourApproximation::Simple);
    let solid = select_solid_contours(&contours);
    trace!(
        contours = contours.len(),
        solid = solid.len(),
        "edge contours"
    );

    let mut view = edge_map.as_view_mut();
    for &id in &solid {
        fill_contour(&mut view, contours.points(id), 0);
    }

    Ok(subtract_saturating_u8(image, &edge_map.as_view())?)
}

#[cfg(test)]
mod tests {
    use ce_contour::{ContourApproximation, find_contours};
    use ce_core::Image;

    use super::{amplify_edges, laplacian_of_gaussian, select_solid_contours};
    use crate::{EnhanceConfig, EnhanceError};

    fn square_and_annulus() -> Image<u8> {
        let mut img = Image::new_fill(80, 40, 0u8);
        for y in 10..30 {
            for x in 5..25 {
                img.row_mut(y)[x] = 255;
            }
            for x in 45..75 {
                let in_hole = (15..25).contains(&y) && (52..68).contains(&x);
                if !in_hole {
                    img.row_mut(y)[x] = 255;
                }
            }
        }
        img
    }

    #[test]
    fn solid_square_selected_annulus_not() {
        let img = square_and_annulus();
        let set = find_contours(&img.as_view(), ContourApproximation::Simple);
        assert_eq!(set.len(), 3);

        let solid = select_solid_contours(&set);
        assert_eq!(solid.len(), 1);
        assert!(set.points(solid[0]).iter().all(|p| p.x < 40));
    }

    fn vertical_line(width: usize, height: usize) -> Image<u8> {
        let mut img = Image::new_fill(width, height, 0u8);
        for y in 0..height {
            img.row_mut(y)[width / 2] = 255;
        }
        img
    }

    /// Holds for the edge response only. The amount `amplify_edges` subtracts
    /// can grow with blur size, because a wider response crosses the threshold
    /// over more pixels.
    #[test]
    fn larger_blur_weakens_thin_line_response() {
        let img = vertical_line(41, 21);
        let total = |blur: usize| -> u32 {
            let cfg = EnhanceConfig::default().with_laplacian_blur_size(blur);
            laplacian_of_gaussian(&img.as_view(), &cfg)
                .expect("valid config")
                .data()
                .iter()
                .map(|&v| v as u32)
                .sum()
        };

        let (r3, r7, r9) = (total(3), total(7), total(9));
        assert!(r3 > r7, "{r3} <= {r7}");
        assert!(r7 > r9, "{r7} <= {r9}");
    }

    #[test]
    fn flat_image_passes_through() {
        let img = Image::new_fill(30, 20, 140u8);
        let out = amplify_edges(&img.as_view(), &EnhanceConfig::default()).expect("valid input");
        assert_eq!(out, img);
    }

    #[test]
    fn output_never_exceeds_input() {
        let mut img = Image::new_fill(60, 60, 30u8);
        for y in 0..60 {
            for x in 0..60 {
                let dx = x as f32 - 30.0;
                let dy = y as f32 - 30.0;
                if (dx * dx + dy * dy).sqrt() < 12.0 {
                    img.row_mut(y)[x] = 220;
                }
            }
        }
        let out = amplify_edges(&img.as_view(), &EnhanceConfig::default()).expect("valid input");
        assert_eq!(out.dims(), img.dims());
        assert!(out.data().iter().zip(img.data()).all(|(&o, &i)| o <= i));
        // The rim of the bright disk is darkened.
        assert!(out.row(30)[41] < img.row(30)[41] || out.row(30)[42] < img.row(30)[42]);
    }

    #[test]
    fn even_blur_is_a_configuration_error() {
        let img = Image::new_fill(8, 8, 0u8);
        let cfg = EnhanceConfig::default().with_laplacian_blur_size(4);
        assert!(matches!(
            amplify_edges(&img.as_view(), &cfg),
            Err(EnhanceError::InvalidConfiguration(_))
        ));
    }
}
