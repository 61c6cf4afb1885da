//! # imgconv
//!
//! Convert raster images between JPEG, binary PPM and 24-bit BMP. The format
//! of each side is chosen from the file extension alone; the source is
//! decoded into an [`Image`] and re-encoded into the target format.
//!
//! ## Supported Formats
//!
//! - **PPM** (`.ppm`): binary P6, maxval 255
//! - **BMP** (`.bmp`): uncompressed 24-bit, `BITMAPINFOHEADER`
//! - **JPEG** (`.jpg`, `.jpeg`): via `zune-jpeg` / `jpeg-encoder` (`jpeg` feature)
//!
//! ## Non-Goals
//!
//! - Color depths other than 8-bit RGB (alpha is never persisted)
//! - Compressed BMP, ASCII PNM, 16-bit PNM
//! - Detecting the format from file content
//!
//! ## Usage
//!
//! ```no_run
//! use imgconv::{Format, resolve, capabilities_for};
//!
//! let Some(reader) = capabilities_for(resolve("in.ppm")) else {
//!     panic!("unknown input format");
//! };
//! let image = reader.load("in.ppm");
//! if image.is_empty() {
//!     eprintln!("Loading failed");
//! }
//! assert!(Format::Bmp.codec().unwrap().save("out.bmp", &image));
//! ```
//!
//! The `load`/`save` pair follows the sentinel contract (0×0 image, `false`).
//! [`Codec::try_load`] and [`Codec::try_save`] return the underlying
//! [`CodecError`] instead, and [`CodecError::kind`] classifies it.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod format;
mod limits;
mod pixel;

pub mod bmp;
pub mod pnm;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "std")]
mod convert;
#[cfg(feature = "std")]
mod io;

// Re-exports
#[cfg(feature = "std")]
pub use convert::{ConvertError, ConvertRequest, Converted};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{CodecError, ErrorKind};
#[cfg(feature = "std")]
pub use format::resolve;
pub use format::{Codec, DEFAULT_JPEG_QUALITY, EncodeOptions, Format, capabilities_for};
pub use limits::Limits;
pub use pixel::{Color, Image};
