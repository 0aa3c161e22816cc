//! Image buffers and sampling primitives shared by the colony-enhance crates.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`, so
//! views can borrow padded camera buffers without a copy.
//!
//! ## Colour Layout
//! Colour images are interleaved `Image<[u8; 3]>`. [`ChannelPlanes`] holds the
//! same data as three independent single-channel planes; [`ChannelOrder`]
//! says which interleaved slot holds which colour.
//!
//! ## Border Modes
//! Filters support clamp (replicate), constant fill, and reflect-101.
//! Reflect-101 mirrors around edge pixels without repeating edge elements.
//!
//! ## Sampling Coordinates
//! Integer coordinates refer to pixel centers. Bilinear sampling uses the
//! floor-based 2x2 neighborhood.

mod border;
mod error;
mod geom;
mod image;
mod planes;
mod sample;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use geom::{Point2i, Rect};
pub use image::{Image, ImageView, ImageViewMut, to_f32};
pub use planes::{ChannelOrder, ChannelPlanes};
pub use sample::{sample_bilinear_f32, saturate_u8};
