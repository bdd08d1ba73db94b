//! JPEG codec bridging to the `image` crate.
//!
//! Entropy coding, Huffman tables, and the DCT all live in the
//! library; this module only moves scanlines between [`Image`] and the
//! library's RGB8 buffers. Library failures surface as
//! [`CodecError::Jpeg`] — nothing unwinds across the codec boundary.

use image::codecs::jpeg::JpegEncoder;
use rgb::RGBA8;

use crate::error::CodecError;
use crate::image::Image;

/// Decode baseline JPEG into an [`Image`] (alpha synthesized as 255).
pub fn decode(data: &[u8]) -> Result<Image, CodecError> {
    let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)?;
    let rgb = decoded.into_rgb8();
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    if w == 0 || h == 0 {
        return Err(CodecError::InvalidHeader("JPEG dimensions are degenerate".into()));
    }

    let mut image = Image::new(w, h, RGBA8::new(0, 0, 0, 255));
    for (src_row, dst_row) in rgb.as_raw().chunks_exact(w * 3).zip(image.rows_mut()) {
        for (s, px) in src_row.chunks_exact(3).zip(dst_row.iter_mut()) {
            *px = RGBA8::new(s[0], s[1], s[2], 255);
        }
    }
    Ok(image)
}

/// Encode an [`Image`] as JPEG at the library's default quality.
pub fn encode(image: &Image) -> Result<Vec<u8>, CodecError> {
    if image.is_empty() {
        return Err(CodecError::InvalidHeader(
            "refusing to encode an empty image as JPEG".into(),
        ));
    }
    let view = image.as_imgref();
    let mut rgb = Vec::with_capacity(view.width() * view.height() * 3);
    for row in view.rows() {
        for px in row {
            rgb.push(px.r);
            rgb.push(px.g);
            rgb.push(px.b);
        }
    }

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new(&mut out);
    encoder.encode(
        &rgb,
        view.width() as u32,
        view.height() as u32,
        image::ColorType::Rgb8,
    )?;
    Ok(out)
}
