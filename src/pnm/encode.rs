//! PPM encoder: P6, maxval 255.

use super::PPM_MAXVAL;
use crate::error::CodecError;
use crate::pixel::Image;
use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

pub(crate) fn encode_ppm(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (image.width(), image.height());
    let payload = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(CodecError::too_large(width, height))?;

    let header = format!("P6\n{width} {height}\n{PPM_MAXVAL}\n");
    let mut out = Vec::with_capacity(header.len().saturating_add(payload));
    out.extend_from_slice(header.as_bytes());

    for (y, row) in image.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Color;
    use enough::Unstoppable;

    #[test]
    fn header_then_unpadded_rgb() {
        let mut img = Image::new(1, 2, Color::new(0, 0, 0, 255)).unwrap();
        img.row_mut(0)[0] = Color::new(1, 2, 3, 0);
        img.row_mut(1)[0] = Color::new(4, 5, 6, 0);
        let out = encode_ppm(&img, &Unstoppable).unwrap();
        assert_eq!(&out[..], b"P6\n1 2\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn empty_image_is_header_only() {
        let out = encode_ppm(&Image::default(), &Unstoppable).unwrap();
        assert_eq!(&out[..], b"P6\n0 0\n255\n");
    }

    #[test]
    fn odd_width_has_no_padding() {
        let img = Image::new(5, 3, Color::new(9, 9, 9, 255)).unwrap();
        let out = encode_ppm(&img, &Unstoppable).unwrap();
        assert_eq!(out.len(), b"P6\n5 3\n255\n".len() + 5 * 3 * 3);
    }
}
