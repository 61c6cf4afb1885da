//! Extension-based format dispatch.
//!
//! [`resolve`] maps a path to a [`Format`]; [`capabilities_for`] turns a known
//! format into a [`Codec`], the closed set of load/save implementations.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::CodecError;
use crate::limits::Limits;
use crate::pixel::Image;
use crate::{bmp, pnm};

/// Image format as inferred from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Binary PPM (`.ppm`).
    Ppm,
    /// JPEG (`.jpg`, `.jpeg`).
    Jpeg,
    /// 24-bit BMP (`.bmp`).
    Bmp,
    /// Any other extension, or none.
    Unknown,
}

impl Format {
    /// Match the extension exactly (case-sensitive): `.JPG` is `Unknown`.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "jpg" | "jpeg" => Format::Jpeg,
            "ppm" => Format::Ppm,
            "bmp" => Format::Bmp,
            _ => Format::Unknown,
        }
    }

    /// The codec for this format, or `None` for [`Format::Unknown`].
    pub fn codec(self) -> Option<Codec> {
        match self {
            Format::Ppm => Some(Codec::Ppm),
            Format::Jpeg => Some(Codec::Jpeg),
            Format::Bmp => Some(Codec::Bmp),
            Format::Unknown => None,
        }
    }
}

#[cfg(feature = "std")]
impl Format {
    /// Resolve from the path's extension. Non-UTF-8 extensions are `Unknown`.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(Format::Unknown, Format::from_extension)
    }
}

/// Resolve the format of `path` from its extension alone. No I/O.
#[cfg(feature = "std")]
pub fn resolve(path: impl AsRef<std::path::Path>) -> Format {
    Format::from_path(path)
}

/// The load/save pair for `format`; `None` means no codec is available and
/// the caller must not touch any file.
pub fn capabilities_for(format: Format) -> Option<Codec> {
    format.codec()
}

/// Encoder settings. Only JPEG has any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// 1..=100.
    pub jpeg_quality: u8,
}

/// libjpeg's default quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// A format's load/save capability. Dispatch is a `match` on the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    Ppm,
    Jpeg,
    Bmp,
}

impl Codec {
    pub fn format(self) -> Format {
        match self {
            Codec::Ppm => Format::Ppm,
            Codec::Jpeg => Format::Jpeg,
            Codec::Bmp => Format::Bmp,
        }
    }

    /// Decode an in-memory file.
    pub fn decode(
        self,
        data: &[u8],
        limits: Option<&Limits>,
        stop: impl Stop,
    ) -> Result<Image, CodecError> {
        match self {
            Codec::Ppm => pnm::decode(data, limits, stop),
            Codec::Bmp => bmp::decode(data, limits, stop),
            #[cfg(feature = "jpeg")]
            Codec::Jpeg => crate::jpeg::decode(data, limits, stop),
            #[cfg(not(feature = "jpeg"))]
            Codec::Jpeg => {
                let _ = (data, limits, stop);
                Err(jpeg_disabled())
            }
        }
    }

    /// Encode to an in-memory file.
    pub fn encode(
        self,
        image: &Image,
        options: &EncodeOptions,
        stop: impl Stop,
    ) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Ppm => pnm::encode(image, stop),
            Codec::Bmp => bmp::encode(image, stop),
            #[cfg(feature = "jpeg")]
            Codec::Jpeg => crate::jpeg::encode(image, options.jpeg_quality, stop),
            #[cfg(not(feature = "jpeg"))]
            Codec::Jpeg => {
                let _ = (image, options, stop);
                Err(jpeg_disabled())
            }
        }
    }
}

#[cfg(not(feature = "jpeg"))]
fn jpeg_disabled() -> CodecError {
    CodecError::UnsupportedVariant(
        "JPEG support not compiled in (enable the `jpeg` feature)".into(),
    )
}

#[cfg(feature = "std")]
impl Codec {
    /// Read and decode `path`.
    pub fn try_load(
        self,
        path: impl AsRef<std::path::Path>,
        limits: Option<&Limits>,
    ) -> Result<Image, CodecError> {
        let path = path.as_ref();
        let data = crate::io::read_file(path)?;
        let image = self.decode(&data, limits, enough::Unstoppable)?;
        log::debug!(
            "decoded {:?} {}x{} from {}",
            self,
            image.width(),
            image.height(),
            path.display()
        );
        Ok(image)
    }

    /// Encode `image` and write it to `path`. Encoding finishes before the
    /// destination is created, so an encode error leaves no file behind.
    pub fn try_save(
        self,
        path: impl AsRef<std::path::Path>,
        image: &Image,
        options: &EncodeOptions,
    ) -> Result<(), CodecError> {
        let bytes = self.encode(image, options, enough::Unstoppable)?;
        crate::io::write_file(path.as_ref(), &bytes)
    }

    /// Load `path`, returning the 0×0 sentinel on any failure.
    pub fn load(self, path: impl AsRef<std::path::Path>) -> Image {
        let path = path.as_ref();
        self.try_load(path, None).unwrap_or_else(|err| {
            log::warn!("loading {} as {:?} failed: {err}", path.display(), self);
            Image::default()
        })
    }

    /// Save `image` to `path` with default options; `false` on any failure.
    pub fn save(self, path: impl AsRef<std::path::Path>, image: &Image) -> bool {
        let path = path.as_ref();
        match self.try_save(path, image, &EncodeOptions::default()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("saving {} as {:?} failed: {err}", path.display(), self);
                false
            }
        }
    }
}
