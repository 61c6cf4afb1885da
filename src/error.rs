use alloc::string::String;
use enough::StopReason;

/// Errors from BMP/PPM/JPEG decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel buffer holds {actual} pixels, image needs {needed}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("image has no pixels")]
    EmptyImage,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "jpeg")]
    #[error("jpeg decoding failed: {0}")]
    JpegDecode(#[from] zune_jpeg::errors::DecodeErrors),

    #[cfg(feature = "jpeg")]
    #[error("jpeg encoding failed: {0}")]
    JpegEncode(#[from] jpeg_encoder::EncodingError),
}

impl From<StopReason> for CodecError {
    fn from(r: StopReason) -> Self {
        CodecError::Cancelled(r)
    }
}

/// Coarse failure classes a caller can branch on (and map to exit codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path extension does not map to any codec.
    UnresolvedFormat,
    /// The source could not be read or the destination could not be created.
    Open,
    /// Wrong magic/signature, bad maxval, misplaced newline, size mismatch.
    MalformedHeader,
    /// Fewer bytes than the declared dimensions require.
    TruncatedData,
    /// A write to the destination failed.
    Write,
    /// Well-formed input this crate does not handle (other bit depths, compression).
    Unsupported,
    /// Dimensions overflow or exceed configured [`crate::Limits`].
    Limits,
    /// The [`enough::Stop`] token requested cancellation.
    Cancelled,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat | Self::InvalidHeader(_) | Self::EmptyImage => {
                ErrorKind::MalformedHeader
            }
            Self::UnexpectedEof => ErrorKind::TruncatedData,
            Self::UnsupportedVariant(_) | Self::BufferTooSmall { .. } => ErrorKind::Unsupported,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limits,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            #[cfg(feature = "std")]
            Self::Open { .. } => ErrorKind::Open,
            #[cfg(feature = "std")]
            Self::Write { .. } => ErrorKind::Write,
            #[cfg(feature = "jpeg")]
            Self::JpegDecode(_) => ErrorKind::MalformedHeader,
            #[cfg(feature = "jpeg")]
            Self::JpegEncode(_) => ErrorKind::Unsupported,
        }
    }

    pub(crate) fn too_large(width: impl Into<u64>, height: impl Into<u64>) -> Self {
        Self::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        }
    }
}
