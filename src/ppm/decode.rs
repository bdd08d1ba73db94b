//! P6 decoder.

use rgb::RGBA8;

use crate::error::CodecError;
use crate::image::Image;

/// Decode a binary PPM (P6, maxval 255) into an [`Image`].
pub fn decode(data: &[u8]) -> Result<Image, CodecError> {
    if data.len() < 2 || &data[0..2] != b"P6" {
        return Err(CodecError::UnrecognizedFormat);
    }
    let mut pos = 2;

    let width = read_header_int(data, &mut pos)?;
    let height = read_header_int(data, &mut pos)?;
    let maxval = read_header_int(data, &mut pos)?;
    if maxval != 255 {
        return Err(CodecError::UnsupportedVariant(format!(
            "PPM maxval {maxval}, only 255 is supported"
        )));
    }
    // Exactly one whitespace byte separates the header from pixel data.
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        _ => {
            return Err(CodecError::InvalidHeader(
                "missing whitespace after PPM maxval".into(),
            ));
        }
    }

    if width == 0 || height == 0 {
        return Err(CodecError::InvalidHeader(format!(
            "PPM dimensions are degenerate ({width}x{height})"
        )));
    }
    let w = width as usize;
    let h = height as usize;
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(CodecError::DimensionsTooLarge { width, height })?;

    let pixel_data = &data[pos..];
    if pixel_data.len() < expected {
        return Err(CodecError::UnexpectedEof);
    }

    let mut image = Image::new(w, h, RGBA8::new(0, 0, 0, 255));
    for (src_row, dst_row) in pixel_data.chunks_exact(w * 3).zip(image.rows_mut()) {
        for (rgb, px) in src_row.chunks_exact(3).zip(dst_row.iter_mut()) {
            *px = RGBA8::new(rgb[0], rgb[1], rgb[2], 255);
        }
    }

    Ok(image)
}

/// Skip whitespace and `#` comments, then parse a decimal integer.
fn read_header_int(data: &[u8], pos: &mut usize) -> Result<u32, CodecError> {
    loop {
        while *pos < data.len() && data[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < data.len() && data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
        } else {
            break;
        }
    }
    if *pos >= data.len() {
        return Err(CodecError::UnexpectedEof);
    }

    let start = *pos;
    let mut val: u32 = 0;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        val = val
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(data[*pos] - b'0')))
            .ok_or_else(|| CodecError::InvalidHeader("PPM header integer overflow".into()))?;
        *pos += 1;
    }
    if *pos == start {
        return Err(CodecError::InvalidHeader(
            "expected integer in PPM header".into(),
        ));
    }
    Ok(val)
}
