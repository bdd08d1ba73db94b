//! P6 encoder.

use crate::error::CodecError;
use crate::image::Image;

/// Encode an [`Image`] as binary PPM (P6, maxval 255). Alpha is dropped.
pub fn encode(image: &Image) -> Result<Vec<u8>, CodecError> {
    let w = image.width();
    let h = image.height();
    let header = format!("P6\n{w} {h}\n255\n");

    let pixel_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(CodecError::DimensionsTooLarge {
            width: w as u32,
            height: h as u32,
        })?;
    let mut out = Vec::with_capacity(header.len() + pixel_bytes);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for px in image.row(y) {
            out.push(px.r);
            out.push(px.g);
            out.push(px.b);
        }
    }

    Ok(out)
}
