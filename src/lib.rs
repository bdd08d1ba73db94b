//! # imgconv
//!
//! File-to-file raster image conversion between BMP, PPM, and JPEG.
//!
//! The BMP codec is fully hand-rolled (bit-packed headers, 4-byte row
//! stride, bottom-up row order, B,G,R channel order on disk), the PPM
//! codec covers binary P6 with maxval 255, and the JPEG codec delegates
//! compression to the `image` crate. All three sit behind the same
//! extension-dispatched [`ImageFormat`] registry, and
//! [`convert`] wires them into a load/validate/save pipeline.
//!
//! ## Non-Goals
//!
//! - Bit depths other than 24-bit truecolor BMP
//! - Compressed BMP variants (RLE, bitfields)
//! - Progressive or lossless JPEG
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use imgconv::convert;
//! # fn main() -> Result<(), imgconv::ConvertError> {
//! convert("photo.jpg".as_ref(), "photo.bmp".as_ref())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod bmp;
mod convert;
mod error;
mod format;
mod image;
pub mod jpeg;
pub mod ppm;

// Re-exports
pub use self::convert::{ConvertError, convert};
pub use self::error::CodecError;
pub use self::format::ImageFormat;
pub use self::image::Image;
pub use rgb::RGBA8;
