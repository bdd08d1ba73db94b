//! BMP encoder: uncompressed 24-bit truecolor.

use super::{BMP_MAGIC, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, PIXELS_PER_METER, row_stride};
use crate::error::CodecError;
use crate::image::Image;

/// Encode an [`Image`] as a 24-bit uncompressed BMP.
///
/// Alpha is dropped; rows are written bottom-up with zero padding to a
/// four-byte stride.
pub fn encode(image: &Image) -> Result<Vec<u8>, CodecError> {
    let w = image.width();
    let h = image.height();
    if i32::try_from(w).is_err() || i32::try_from(h).is_err() {
        return Err(CodecError::DimensionsTooLarge {
            width: w as u32,
            height: h as u32,
        });
    }
    let stride = row_stride(w);
    let pixel_data_size = stride.checked_mul(h).ok_or(CodecError::DimensionsTooLarge {
        width: w as u32,
        height: h as u32,
    })?;
    let file_size = pixel_data_size + PIXEL_DATA_OFFSET as usize;

    let mut out = Vec::with_capacity(file_size);
    write_header(&mut out, file_size, pixel_data_size, w as i32, h as i32);

    let pad_bytes = stride - w * 3;
    for y in (0..h).rev() {
        for px in image.row(y) {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(std::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, file_size: usize, pixel_data_size: usize, width: i32, height: i32) {
    // File header (14 bytes)
    out.extend_from_slice(&BMP_MAGIC.to_le_bytes());
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0x0100_0000u32.to_le_bytes()); // important colors: all 2^24
}
