//! PPM decoder: P6 header tokens, then the raw payload.

use enough::Stop;

use super::{PPM_MAGIC, PPM_MAXVAL, PnmHeader};
use crate::error::CodecError;
use crate::limits::{Limits, check_limits};
use crate::pixel::{Image, OPAQUE_BLACK};

/// Netpbm whitespace (C `isspace` set, including VT and FF).
fn is_pnm_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments (to end of line) before a token.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if is_pnm_whitespace(b) {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8], CodecError> {
        self.skip_separators();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|&b| !is_pnm_whitespace(b))
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(CodecError::UnexpectedEof);
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self, what: &str) -> Result<u32, CodecError> {
        let tok = self.token()?;
        let value: i64 = core::str::from_utf8(tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                CodecError::InvalidHeader(alloc::format!("PPM {what} is not a number"))
            })?;
        if value < 0 {
            return Err(CodecError::InvalidHeader(alloc::format!(
                "negative PPM {what} {value}"
            )));
        }
        u32::try_from(value)
            .map_err(|_| {
                CodecError::InvalidHeader(alloc::format!("PPM {what} {value} out of range"))
            })
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.data.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }
}

pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, CodecError> {
    let mut reader = HeaderReader::new(data);

    if reader.token()? != PPM_MAGIC {
        return Err(CodecError::UnrecognizedFormat);
    }
    let width = reader.number("width")?;
    let height = reader.number("height")?;
    let maxval = reader.number("maxval")?;
    if maxval != PPM_MAXVAL {
        return Err(CodecError::InvalidHeader(alloc::format!(
            "PPM maxval {maxval}, only {PPM_MAXVAL} is supported"
        )));
    }

    // Exactly one newline separates the header from the payload.
    match reader.next_byte() {
        Some(b'\n') => {}
        Some(other) => {
            return Err(CodecError::InvalidHeader(alloc::format!(
                "expected newline after PPM maxval, found byte 0x{other:02x}"
            )));
        }
        None => return Err(CodecError::UnexpectedEof),
    }

    Ok(PnmHeader {
        width,
        height,
        data_offset: reader.pos,
    })
}

pub(crate) fn decode_ppm(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, CodecError> {
    let header = parse_header(data)?;
    let (width, height) = (header.width, header.height);
    check_limits(limits, width, height)?;

    let row_bytes = (width as usize)
        .checked_mul(3)
        .ok_or(CodecError::too_large(width, height))?;
    let payload_len = row_bytes
        .checked_mul(height as usize)
        .ok_or(CodecError::too_large(width, height))?;
    let payload = data
        .get(header.data_offset..)
        .and_then(|rest| rest.get(..payload_len))
        .ok_or(CodecError::UnexpectedEof)?;

    stop.check()?;
    let mut image = Image::new(width, height, OPAQUE_BLACK)?;
    if row_bytes == 0 {
        return Ok(image);
    }

    for (y, src) in (0..height).zip(payload.chunks_exact(row_bytes)) {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (px, rgb) in image.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
            px.r = rgb[0];
            px.g = rgb[1];
            px.b = rgb[2];
        }
    }

    Ok(image)
}
