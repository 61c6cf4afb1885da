//! Uncompressed 24-bit BMP: `BITMAPFILEHEADER` + `BITMAPINFOHEADER`,
//! bottom-up rows in B,G,R order, each row zero-padded to a 4-byte boundary.

mod decode;
mod encode;

use crate::error::CodecError;
use crate::limits::Limits;
use crate::pixel::Image;
use alloc::vec::Vec;
use enough::Stop;

/// Size of the `BITMAPFILEHEADER`.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the `BITMAPINFOHEADER`.
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the first pixel byte.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 11811 pixels per metre, i.e. 300 DPI.
const RESOLUTION_PPM: i32 = 11811;
const COLORS_IMPORTANT: i32 = 0x100_0000;

/// Bytes per stored row for a 24-bit image `width` pixels wide:
/// `4 * ceil(3 * width / 4)`. `None` on overflow.
pub fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// The 54-byte header pair, field for field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
    pub info_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub data_size: u32,
    pub h_resolution: i32,
    pub v_resolution: i32,
    pub colors_used: i32,
    pub colors_important: i32,
}

impl BmpHeader {
    /// Header for a 24-bit uncompressed image of the given size.
    pub(crate) fn for_dimensions(width: u32, height: u32) -> Result<Self, CodecError> {
        let too_large = || CodecError::too_large(width, height);
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let data_size = row_stride(width)
            .and_then(|s| s.checked_mul(height as usize))
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let file_size = data_size
            .checked_add(HEADER_SIZE as u32)
            .ok_or_else(too_large)?;

        Ok(Self {
            file_size,
            reserved: 0,
            data_offset: HEADER_SIZE as u32,
            info_size: INFO_HEADER_SIZE as u32,
            width: w,
            height: h,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            data_size,
            h_resolution: RESOLUTION_PPM,
            v_resolution: RESOLUTION_PPM,
            colors_used: 0,
            colors_important: COLORS_IMPORTANT,
        })
    }
}

/// Decode a 24-bit uncompressed BMP.
pub fn decode(data: &[u8], limits: Option<&Limits>, stop: impl Stop) -> Result<Image, CodecError> {
    decode::decode_bmp(data, limits, &stop)
}

/// Encode as a 24-bit uncompressed BMP. Alpha is dropped.
pub fn encode(image: &Image, stop: impl Stop) -> Result<Vec<u8>, CodecError> {
    encode::encode_bmp(image, &stop)
}
