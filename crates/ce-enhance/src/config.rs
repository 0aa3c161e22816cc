use ce_core::ChannelOrder;
use ce_filter::LAPLACIAN_APERTURES;
use serde::{Deserialize, Serialize};

use crate::EnhanceError;

/// How the foreground step evaluates `conv / mask * 255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForegroundArithmetic {
    /// Real-valued quotient; with the flat mask `conv / 255 * 255 == conv`.
    #[default]
    Linear,
    /// Quotient rounded to an 8-bit integer before scaling, then saturated.
    /// With the flat mask this snaps `conv` to 0 or 255.
    Integer,
}

/// Tunables of the enhancement pipeline.
///
/// Deserializes with every field optional, so a partial JSON object only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Gaussian kernel size before the Laplacian (odd, >= 1).
    pub laplacian_blur_size: usize,
    pub gaussian_sigma: f32,
    /// Width of the downscaled background estimate.
    pub target_width: usize,
    /// Median window on the downscaled image (odd, >= 1).
    pub median_size: usize,
    /// Laplacian aperture: 1, 3, 5 or 7.
    pub laplacian_ksize: usize,
    pub laplacian_scale: f32,
    /// Laplacian responses `>=` this value count as edges.
    pub edge_threshold: u8,
    pub foreground: ForegroundArithmetic,
    /// Slot layout of interleaved input pixels.
    pub channel_order: ChannelOrder,
    /// Process the three channels on the rayon pool.
    pub parallel: bool,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            laplacian_blur_size: 7,
            gaussian_sigma: 3.0,
            target_width: 196,
            median_size: 11,
            laplacian_ksize: 5,
            laplacian_scale: 0.3,
            edge_threshold: 10,
            foreground: ForegroundArithmetic::Linear,
            channel_order: ChannelOrder::Rgb,
            parallel: true,
        }
    }
}

impl EnhanceConfig {
    pub fn with_laplacian_blur_size(mut self, size: usize) -> Self {
        self.laplacian_blur_size = size;
        self
    }

    pub fn with_gaussian_sigma(mut self, sigma: f32) -> Self {
        self.gaussian_sigma = sigma;
        self
    }

    pub fn with_target_width(mut self, width: usize) -> Self {
        self.target_width = width;
        self
    }

    pub fn with_median_size(mut self, size: usize) -> Self {
        self.median_size = size;
        self
    }

    pub fn with_laplacian_ksize(mut self, ksize: usize) -> Self {
        self.laplacian_ksize = ksize;
        self
    }

    pub fn with_laplacian_scale(mut self, scale: f32) -> Self {
        self.laplacian_scale = scale;
        self
    }

    pub fn with_edge_threshold(mut self, threshold: u8) -> Self {
        self.edge_threshold = threshold;
        self
    }

    pub fn with_foreground(mut self, foreground: ForegroundArithmetic) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), EnhanceError> {
        if self.laplacian_blur_size % 2 == 0 {
            return Err(EnhanceError::InvalidConfiguration(
                "laplacian_blur_size must be odd and positive",
            ));
        }
        if !(self.gaussian_sigma.is_finite() && self.gaussian_sigma > 0.0) {
            return Err(EnhanceError::InvalidConfiguration(
                "gaussian_sigma must be finite and > 0",
            ));
        }
        if self.target_width == 0 {
            return Err(EnhanceError::InvalidConfiguration(
                "target_width must be > 0",
            ));
        }
        if self.median_size % 2 == 0 {
            return Err(EnhanceError::InvalidConfiguration(
                "median_size must be odd and positive",
            ));
        }
        if !LAPLACIAN_APERTURES.contains(&self.laplacian_ksize) {
            return Err(EnhanceError::InvalidConfiguration(
                "laplacian_ksize must be 1, 3, 5 or 7",
            ));
        }
        if !self.laplacian_scale.is_finite() {
            return Err(EnhanceError::InvalidConfiguration(
                "laplacian_scale must be finite",
            ));
        }
        Ok(())
    }
}
