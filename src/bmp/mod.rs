//! Hand-rolled BMP codec: uncompressed 24-bit truecolor only.
//!
//! Wire layout is the classic 14-byte file header followed by the
//! 40-byte BITMAPINFOHEADER, all integers little-endian, no color
//! table. Rows are stored bottom-up, pixels as B,G,R with each row
//! zero-padded to a four-byte boundary.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

pub(crate) const BMP_MAGIC: u16 = 0x4D42; // "BM"
pub(crate) const INFO_HEADER_SIZE: u32 = 40;
pub(crate) const PIXEL_DATA_OFFSET: u32 = 54;
/// Pixels per meter written into the resolution fields (300 DPI).
pub(crate) const PIXELS_PER_METER: u32 = 11811;

/// Bytes per stored row: `width * 3` pixel bytes padded up to a
/// multiple of four.
pub fn row_stride(width: usize) -> usize {
    (width * 3).div_ceil(4) * 4
}
