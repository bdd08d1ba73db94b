//! BMP decoder for the fixed 24-bit uncompressed layout.

use rgb::RGBA8;

use super::{BMP_MAGIC, row_stride};
use crate::error::CodecError;
use crate::image::Image;

/// Cursor for reading little-endian fields from `&[u8]`.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip(&mut self, n: usize) -> Result<(), CodecError> {
        let new_pos = self.pos.checked_add(n).ok_or(CodecError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(CodecError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    fn get_u16_le(&mut self) -> Result<u16, CodecError> {
        if self.pos + 2 > self.data.len() {
            return Err(CodecError::UnexpectedEof);
        }
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    fn get_u32_le(&mut self) -> Result<u32, CodecError> {
        if self.pos + 4 > self.data.len() {
            return Err(CodecError::UnexpectedEof);
        }
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    fn get_i32_le(&mut self) -> Result<i32, CodecError> {
        self.get_u32_le().map(|v| v as i32)
    }
}

/// Decode a 24-bit uncompressed BMP into an [`Image`].
///
/// Rejects any magic other than "BM", any bit depth other than 24, and
/// any non-zero compression field. A negative stored height only
/// contributes its magnitude: rows are always treated as bottom-up.
pub fn decode(data: &[u8]) -> Result<Image, CodecError> {
    let mut bytes = Cursor::new(data);

    // File header (14 bytes)
    if bytes.get_u16_le()? != BMP_MAGIC {
        return Err(CodecError::UnrecognizedFormat);
    }
    let _file_size = bytes.get_u32_le()?;
    bytes.skip(4)?; // two reserved u16 fields
    let _data_offset = bytes.get_u32_le()?;

    // Info header (40 bytes)
    let _ihsize = bytes.get_u32_le()?;
    let width = bytes.get_i32_le()?;
    let height = bytes.get_i32_le()?;
    let _planes = bytes.get_u16_le()?;
    let bpp = bytes.get_u16_le()?;
    let compression = bytes.get_u32_le()?;
    let _image_size = bytes.get_u32_le()?;
    bytes.skip(8)?; // horizontal/vertical resolution
    bytes.skip(8)?; // color-table-used / color-table-important

    if bpp != 24 {
        return Err(CodecError::UnsupportedVariant(format!(
            "BMP bit depth {bpp}, only 24-bit truecolor is supported"
        )));
    }
    if compression != 0 {
        return Err(CodecError::UnsupportedVariant(format!(
            "compressed BMP (compression method {compression})"
        )));
    }

    if width <= 0 {
        return Err(CodecError::InvalidHeader(format!(
            "BMP width is non-positive ({width})"
        )));
    }
    let w = width as usize;
    let h = height.unsigned_abs() as usize;
    if h == 0 {
        return Err(CodecError::InvalidHeader("BMP height is zero".into()));
    }

    let stride = row_stride(w);
    let expected = stride
        .checked_mul(h)
        .ok_or(CodecError::DimensionsTooLarge {
            width: width as u32,
            height: height.unsigned_abs(),
        })?;
    let pixel_data = &data[bytes.pos..];
    if pixel_data.len() < expected {
        return Err(CodecError::UnexpectedEof);
    }

    let mut image = Image::new(w, h, RGBA8::new(0, 0, 0, 255));

    // Rows are stored bottom-up: the first stored row is the bottom
    // logical row. Trailing `stride - w*3` padding bytes per row are
    // discarded. Alpha is not representable in 24-bit BMP and comes
    // back fully opaque.
    for (src_row, dst_row) in pixel_data.chunks_exact(stride).zip(image.rows_mut().rev()) {
        for (bgr, px) in src_row[..w * 3].chunks_exact(3).zip(dst_row.iter_mut()) {
            *px = RGBA8::new(bgr[2], bgr[1], bgr[0], 255);
        }
    }

    Ok(image)
}
