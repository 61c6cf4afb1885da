//! BMP encoder: uncompressed 24-bit, bottom-up.

use super::{BmpHeader, row_stride};
use crate::error::CodecError;
use crate::pixel::Image;
use alloc::vec::Vec;
use enough::Stop;

pub(crate) fn encode_bmp(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (image.width(), image.height());
    let header = BmpHeader::for_dimensions(width, height)?;
    let row_stride = row_stride(width).ok_or(CodecError::too_large(width, height))?;
    let pad_bytes = row_stride - width as usize * 3;

    stop.check()?;

    let mut out = Vec::with_capacity(header.file_size as usize);
    write_header(&mut out, &header);

    // Bottom row first
    for (i, row) in image.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), header.file_size as usize);
    Ok(out)
}

fn write_header(out: &mut Vec<u8>, h: &BmpHeader) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&h.file_size.to_le_bytes());
    out.extend_from_slice(&h.reserved.to_le_bytes());
    out.extend_from_slice(&h.data_offset.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&h.info_size.to_le_bytes());
    out.extend_from_slice(&h.width.to_le_bytes());
    out.extend_from_slice(&h.height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&h.planes.to_le_bytes());
    out.extend_from_slice(&h.bits_per_pixel.to_le_bytes());
    out.extend_from_slice(&h.compression.to_le_bytes());
    out.extend_from_slice(&h.data_size.to_le_bytes());
    out.extend_from_slice(&h.h_resolution.to_le_bytes());
    out.extend_from_slice(&h.v_resolution.to_le_bytes());
    out.extend_from_slice(&h.colors_used.to_le_bytes());
    out.extend_from_slice(&h.colors_important.to_le_bytes());
}
