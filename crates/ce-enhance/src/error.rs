use core::fmt;

/// Failure of an enhancement call. Every check runs before any pixel work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    /// Zero-sized image, wrong channel count, or a mask that does not match
    /// the channel it is applied to.
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },
    InvalidConfiguration(&'static str),
    /// The mask has no non-zero cell.
    DegenerateMask,
    Buffer(ce_core::Error),
}

impl fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                channels,
            } => write!(
                f,
                "invalid image dimensions: {width}x{height} with {channels} channel(s)"
            ),
            Self::InvalidConfiguration(what) => write!(f, "invalid configuration: {what}"),
            Self::DegenerateMask => write!(f, "mask is zero everywhere"),
            Self::Buffer(err) => write!(f, "buffer error: {err}"),
        }
    }
}

impl std::error::Error for EnhanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ce_core::Error> for EnhanceError {
    fn from(err: ce_core::Error) -> Self {
        Self::Buffer(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::EnhanceError;

    #[test]
    fn display_and_source() {
        let err = EnhanceError::InvalidDimensions {
            width: 0,
            height: 4,
            channels: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid image dimensions: 0x4 with 3 channel(s)"
        );
        assert!(err.source().is_none());

        let err = EnhanceError::from(ce_core::Error::InvalidStride);
        assert_eq!(err.to_string(), "buffer error: invalid stride");
        assert!(err.source().is_some());
    }
}
