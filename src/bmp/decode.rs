//! BMP decoder: 24-bit uncompressed `BITMAPINFOHEADER` files only.

use enough::Stop;

use super::{BmpHeader, HEADER_SIZE, row_stride};
use crate::error::CodecError;
use crate::limits::{Limits, check_limits};
use crate::pixel::{Image, OPAQUE_BLACK};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let end = self.pos.checked_add(N).ok_or(CodecError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(CodecError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, CodecError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, CodecError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, CodecError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header ──────────────────────────────────────────────────────────

/// Parse the 54-byte header pair. Only the signature is validated here.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, CodecError> {
    if data.len() < HEADER_SIZE {
        return Err(CodecError::UnexpectedEof);
    }
    let mut cur = Cursor::new(data);
    if cur.read_fixed_bytes::<2>()? != *b"BM" {
        return Err(CodecError::UnrecognizedFormat);
    }

    Ok(BmpHeader {
        file_size: cur.get_u32_le()?,
        reserved: cur.get_u32_le()?,
        data_offset: cur.get_u32_le()?,
        info_size: cur.get_u32_le()?,
        width: cur.get_i32_le()?,
        height: cur.get_i32_le()?,
        planes: cur.get_u16_le()?,
        bits_per_pixel: cur.get_u16_le()?,
        compression: cur.get_u32_le()?,
        data_size: cur.get_u32_le()?,
        h_resolution: cur.get_i32_le()?,
        v_resolution: cur.get_i32_le()?,
        colors_used: cur.get_i32_le()?,
        colors_important: cur.get_i32_le()?,
    })
}

/// Validate a parsed header and return `(width, height, row_stride)`.
fn validate(header: &BmpHeader) -> Result<(u32, u32, usize), CodecError> {
    // Top-down (negative height) files are not produced by this codec and
    // would otherwise size the allocation from a sign-extended value.
    let width = u32::try_from(header.width).map_err(|_| {
        CodecError::InvalidHeader(alloc::format!("negative BMP width {}", header.width))
    })?;
    let height = u32::try_from(header.height).map_err(|_| {
        CodecError::InvalidHeader(alloc::format!("negative BMP height {}", header.height))
    })?;

    if header.bits_per_pixel != 24 || header.compression != 0 {
        return Err(CodecError::UnsupportedVariant(alloc::format!(
            "{}-bit BMP with compression {} (only 24-bit uncompressed)",
            header.bits_per_pixel, header.compression
        )));
    }

    let stride = row_stride(width).ok_or(CodecError::too_large(width, height))?;
    let expected = stride as u64 * u64::from(height);
    if expected != u64::from(header.data_size) {
        return Err(CodecError::InvalidHeader(alloc::format!(
            "BMP data size {} does not match stride {stride} x height {height}",
            header.data_size
        )));
    }

    Ok((width, height, stride))
}

// ── Full decode ─────────────────────────────────────────────────────

pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, CodecError> {
    let header = parse_bmp_header(data)?;
    let (width, height, stride) = validate(&header)?;
    check_limits(limits, width, height)?;

    let pixel_end = HEADER_SIZE
        .checked_add(header.data_size as usize)
        .ok_or(CodecError::too_large(width, height))?;
    let pixel_data = data
        .get(HEADER_SIZE..pixel_end)
        .ok_or(CodecError::UnexpectedEof)?;

    stop.check()?;
    let mut image = Image::new(width, height, OPAQUE_BLACK)?;
    if stride == 0 {
        return Ok(image);
    }

    // First stored row is the bottom image row
    for (i, (src, y)) in pixel_data
        .chunks_exact(stride)
        .zip((0..height).rev())
        .enumerate()
    {
        if i % 16 == 0 {
            stop.check()?;
        }
        for (px, bgr) in image.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
            px.b = bgr[0];
            px.g = bgr[1];
            px.r = bgr[2];
        }
    }

    Ok(image)
}
