//! Umbrella crate for the `colony-enhance` workspace.
//!
//! Re-exports the pipeline entry points and image types at the top level.
//! The building blocks stay reachable through their own modules.

pub use ce_core::*;
pub use ce_enhance::*;

pub use ce_contour as contour;
pub use ce_filter as filter;
pub use ce_resample as resample;
