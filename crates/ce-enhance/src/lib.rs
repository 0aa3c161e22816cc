//! Colony plate enhancement.
//!
//! Each colour channel is processed on its own:
//! 1. The slow-varying background is estimated by median filtering a copy
//!    shrunk to a fixed width, then enlarged back to full size.
//! 2. The channel is replaced by how far it falls below that background and
//!    min-max stretched inside the illumination mask.
//! 3. A Laplacian of Gaussian edge map is thresholded and traced; edges that
//!    trace out solid blobs are dropped, and the rest of the map is
//!    subtracted, which darkens colony rims.
//!
//! The three enhanced channels are merged into one luma plane.
//!
//! The default illumination mask is flat (all 255), which makes the mask
//! division a no-op; [`process_with_mask`] accepts a real reference.

mod channel;
mod config;
mod edges;
mod error;
mod mask;
mod pipeline;

pub use channel::enhance_channel;
pub use config::{EnhanceConfig, ForegroundArithmetic};
pub use edges::{amplify_edges, laplacian_of_gaussian, select_solid_contours};
pub use error::EnhanceError;
pub use mask::build_illumination_mask;
pub use pipeline::{process, process_interleaved, process_planes, process_with_mask, to_grayscale};
