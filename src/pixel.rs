use alloc::vec;
use alloc::vec::Vec;

use crate::error::CodecError;

/// One RGBA pixel, 8 bits per channel. BMP and PPM persist only red, green and blue.
pub type Color = rgb::RGBA8;

/// Fill value for freshly decoded images: black, fully opaque.
pub(crate) const OPAQUE_BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Row-major RGBA pixel buffer.
///
/// The default value (0×0, no rows) is the "nothing loaded" sentinel returned
/// by [`crate::Codec::load`] on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Allocate a `width`×`height` image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, CodecError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wrap an existing row-major pixel vector of exactly `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, CodecError> {
        let needed = pixel_count(width, height)?;
        if pixels.len() != needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The 0×0 sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image holds no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: u32) -> &[Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// Rows top to bottom; always `height` rows of `width` pixels.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.pixels[y * w..(y + 1) * w])
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Borrow as an [`imgref::ImgRef`]. `None` for an empty image,
    /// which `imgref` cannot represent.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, Color>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(
            &self.pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

#[cfg(feature = "imgref")]
impl TryFrom<imgref::ImgVec<Color>> for Image {
    type Error = CodecError;

    fn try_from(img: imgref::ImgVec<Color>) -> Result<Self, Self::Error> {
        let (w, h) = (img.width(), img.height());
        let width = u32::try_from(w).map_err(|_| CodecError::too_large(w as u64, h as u64))?;
        let height = u32::try_from(h).map_err(|_| CodecError::too_large(w as u64, h as u64))?;
        // Drops any stride padding the ImgVec carries.
        let pixels = img.rows().flat_map(|row| row.iter().copied()).collect();
        Image::from_pixels(width, height, pixels)
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, CodecError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(CodecError::too_large(width, height))
}
