//! JPEG through pure-Rust libraries: `zune-jpeg` decodes, `jpeg-encoder` encodes.
//!
//! Every library failure comes back as an ordinary [`CodecError`]; nothing
//! unwinds into the dispatcher.

use alloc::vec::Vec;
use enough::Stop;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::CodecError;
use crate::limits::{Limits, check_limits};
use crate::pixel::{Color, Image};

pub use crate::format::DEFAULT_JPEG_QUALITY as DEFAULT_QUALITY;

/// Decode a baseline or progressive JPEG to RGB (alpha = 255).
pub fn decode(data: &[u8], limits: Option<&Limits>, stop: impl Stop) -> Result<Image, CodecError> {
    let mut decoder = zune_jpeg::JpegDecoder::new(data);
    decoder.decode_headers()?;

    let info = decoder.info().ok_or_else(|| {
        CodecError::JpegDecode(zune_jpeg::errors::DecodeErrors::Format(
            "Failed to find image info from its metadata".into(),
        ))
    })?;
    let (width, height) = (u32::from(info.width), u32::from(info.height));
    check_limits(limits, width, height)?;

    stop.check()?;
    let samples = decoder.decode()?;
    stop.check()?;

    let pixel_count = width as usize * height as usize;
    let channels = if pixel_count == 0 {
        0
    } else {
        samples.len() / pixel_count
    };
    if channels == 0 || samples.len() != pixel_count * channels {
        return Err(CodecError::UnsupportedVariant(alloc::format!(
            "jpeg decoder returned {} bytes for {width}x{height}",
            samples.len()
        )));
    }

    let pixels: Vec<Color> = match channels {
        1 => samples.iter().map(|&l| Color::new(l, l, l, 255)).collect(),
        3 | 4 => samples
            .chunks_exact(channels)
            .map(|s| Color::new(s[0], s[1], s[2], 255))
            .collect(),
        n => {
            return Err(CodecError::UnsupportedVariant(alloc::format!(
                "jpeg output with {n} channels"
            )));
        }
    };
    Image::from_pixels(width, height, pixels)
}

/// Encode as a JPEG at `quality` (clamped to 1..=100). Alpha is dropped.
pub fn encode(image: &Image, quality: u8, stop: impl Stop) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (image.width(), image.height());
    let w = u16::try_from(width).map_err(|_| CodecError::too_large(width, height))?;
    let h = u16::try_from(height).map_err(|_| CodecError::too_large(width, height))?;

    let mut rgb = Vec::with_capacity(image.pixels().len() * 3);
    for (y, row) in image.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            rgb.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, quality.clamp(1, 100));
    encoder.encode(&rgb, w, h, ColorType::Rgb)?;
    Ok(out)
}
