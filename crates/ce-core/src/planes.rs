use serde::{Deserialize, Serialize};

use crate::{Error, Image};

/// Which interleaved slot holds which colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    /// `[r, g, b]`, as produced by most decoders.
    #[default]
    Rgb,
    /// `[b, g, r]`, the usual camera/OpenCV layout.
    Bgr,
}

impl ChannelOrder {
    /// Slot indices of `(red, green, blue)` inside one interleaved pixel.
    pub fn slots(self) -> (usize, usize, usize) {
        match self {
            Self::Rgb => (0, 1, 2),
            Self::Bgr => (2, 1, 0),
        }
    }
}

/// A colour image split into three independent single-channel planes.
///
/// All planes share the same dimensions; constructors enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlanes {
    pub red: Image<u8>,
    pub green: Image<u8>,
    pub blue: Image<u8>,
}

impl ChannelPlanes {
    pub fn new(red: Image<u8>, green: Image<u8>, blue: Image<u8>) -> Result<Self, Error> {
        for plane in [&green, &blue] {
            if plane.dims() != red.dims() {
                return Err(Error::DimensionMismatch {
                    expected: red.dims(),
                    actual: plane.dims(),
                });
            }
        }

        Ok(Self { red, green, blue })
    }

    /// Splits an interleaved image into planes.
    pub fn split(img: &Image<[u8; 3]>, order: ChannelOrder) -> Self {
        let (r, g, b) = order.slots();
        Self {
            red: img.map(|px| px[r]),
            green: img.map(|px| px[g]),
            blue: img.map(|px| px[b]),
        }
    }

    /// Splits a packed byte buffer of `width * height * 3` samples.
    pub fn from_interleaved_bytes(
        width: usize,
        height: usize,
        bytes: &[u8],
        order: ChannelOrder,
    ) -> Result<Self, Error> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(Error::SizeMismatch {
                expected: usize::MAX,
                actual: bytes.len(),
            })?;
        if bytes.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<_>>();
        let img = Image::from_vec(width, height, pixels)?;
        Ok(Self::split(&img, order))
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }
}
