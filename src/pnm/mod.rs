//! Binary PPM (P6) from the PNM family: ASCII header, then top-down R,G,B
//! bytes with no row padding. Only maxval 255 is supported.

mod decode;
mod encode;

use crate::error::CodecError;
use crate::limits::Limits;
use crate::pixel::Image;
use alloc::vec::Vec;
use enough::Stop;

/// Magic token of binary PPM.
pub const PPM_MAGIC: &[u8] = b"P6";
/// The only supported maximum channel value.
pub const PPM_MAXVAL: u32 = 255;

/// Parsed P6 header (internal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PnmHeader {
    pub width: u32,
    pub height: u32,
    /// Offset of the first payload byte (just past the newline after maxval).
    pub data_offset: usize,
}

/// Decode a binary PPM.
pub fn decode(data: &[u8], limits: Option<&Limits>, stop: impl Stop) -> Result<Image, CodecError> {
    decode::decode_ppm(data, limits, &stop)
}

/// Encode as binary PPM. Alpha is dropped.
pub fn encode(image: &Image, stop: impl Stop) -> Result<Vec<u8>, CodecError> {
    encode::encode_ppm(image, &stop)
}
