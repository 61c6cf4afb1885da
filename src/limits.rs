use crate::error::CodecError;
use crate::pixel::Color;

/// Resource limits applied by every decoder before the pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the decoded [`crate::Image`].
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions, then the memory the decoded image would need.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), CodecError> {
        if let Some(max_w) = self.max_width
            && u64::from(width) > max_w
        {
            return Err(CodecError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && u64::from(height) > max_h
        {
            return Err(CodecError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels
            && pixels > max_px
        {
            return Err(CodecError::LimitExceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        if let Some(max_mem) = self.max_memory_bytes {
            let bytes = pixels.saturating_mul(core::mem::size_of::<Color>() as u64);
            if bytes > max_mem {
                return Err(CodecError::LimitExceeded(alloc::format!(
                    "image needs {bytes} bytes, memory limit is {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

/// Apply optional limits; `None` means unlimited.
pub(crate) fn check_limits(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
) -> Result<(), CodecError> {
    match limits {
        Some(limits) => limits.check(width, height),
        None => Ok(()),
    }
}
