//! Contour extraction from binary 8-bit images.
//!
//! Every non-zero pixel is foreground. Borders are traced with the
//! Suzuki-Abe border-following scheme on an 8-connected foreground (and hence
//! a 4-connected background):
//! - an outer border separates a foreground component from the background
//!   around it;
//! - a hole border separates a component from a background region it encloses.
//!
//! The hierarchy is always two-level: outer borders sit at the top level and
//! each hole is a child of the outer border of its own component. A component
//! lying inside a hole is top level again.
//!
//! Points are integer pixel centres. Outer borders run counterclockwise on
//! screen (y down), holes clockwise. [`fill_contour`] paints a closed contour
//! and everything it encloses.

mod fill;
mod hierarchy;
mod trace;

pub use fill::fill_contour;
pub use hierarchy::{ContourApproximation, ContourId, ContourKind, ContourSet, HierarchyRecord};
pub use trace::find_contours;
