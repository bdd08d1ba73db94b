//! Codec-level roundtrips and rejection tests with various patterns
//! and sizes.

use imgconv::{CodecError, Image, ImageFormat, RGBA8, bmp, ppm};

fn checkerboard(w: usize, h: usize) -> Image {
    let mut img = Image::new(w, h, RGBA8::new(0, 0, 0, 255));
    for y in 0..h {
        for x in 0..w {
            let px = if (x + y) % 2 == 0 {
                RGBA8::new(255, 0, 128, 255)
            } else {
                RGBA8::new(0, 200, 50, 255)
            };
            img.set_pixel(x, y, px);
        }
    }
    img
}

fn noise(w: usize, h: usize) -> Image {
    let mut img = Image::new(w, h, RGBA8::new(0, 0, 0, 255));
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, RGBA8::new(next(), next(), next(), 255));
        }
    }
    img
}

// ── BMP ──────────────────────────────────────────────────────────────

#[test]
fn bmp_roundtrip_various_sizes() {
    // Widths 1..5 exercise all four stride paddings.
    for (w, h) in [(1, 1), (2, 3), (3, 2), (4, 4), (5, 7), (64, 64)] {
        let img = noise(w, h);
        let encoded = bmp::encode(&img).unwrap();
        assert_eq!(&encoded[0..2], b"BM");
        assert_eq!(encoded.len(), 54 + bmp::row_stride(w) * h);
        let decoded = bmp::decode(&encoded).unwrap();
        assert_eq!(decoded, img, "roundtrip mismatch at {w}x{h}");
    }
}

#[test]
fn bmp_decode_synthesizes_opaque_alpha() {
    let img = checkerboard(3, 3);
    let decoded = bmp::decode(&bmp::encode(&img).unwrap()).unwrap();
    assert!(decoded.pixels().iter().all(|px| px.a == 255));
}

#[test]
fn bmp_known_pixel_bytes() {
    // 2x2: top row red, green; bottom row blue, white.
    let mut img = Image::new(2, 2, RGBA8::new(0, 0, 0, 255));
    img.set_pixel(0, 0, RGBA8::new(255, 0, 0, 255));
    img.set_pixel(1, 0, RGBA8::new(0, 255, 0, 255));
    img.set_pixel(0, 1, RGBA8::new(0, 0, 255, 255));
    img.set_pixel(1, 1, RGBA8::new(255, 255, 255, 255));

    let encoded = bmp::encode(&img).unwrap();
    // Stored bottom-up, B,G,R, stride 8 (2 pad bytes).
    assert_eq!(
        &encoded[54..70],
        &[
            255, 0, 0, 255, 255, 255, 0, 0, // blue, white + pad
            0, 0, 255, 0, 255, 0, 0, 0, // red, green + pad
        ]
    );
}

#[test]
fn bmp_rejects_bad_magic() {
    let mut encoded = bmp::encode(&checkerboard(2, 2)).unwrap();
    encoded[0] = b'X';
    assert!(matches!(
        bmp::decode(&encoded),
        Err(CodecError::UnrecognizedFormat)
    ));
}

#[test]
fn bmp_rejects_wrong_bit_depth() {
    let mut encoded = bmp::encode(&checkerboard(2, 2)).unwrap();
    encoded[28] = 32; // bits-per-pixel field
    assert!(matches!(
        bmp::decode(&encoded),
        Err(CodecError::UnsupportedVariant(_))
    ));
}

#[test]
fn bmp_rejects_compression() {
    let mut encoded = bmp::encode(&checkerboard(2, 2)).unwrap();
    encoded[30] = 1; // compression field: BI_RLE8
    assert!(matches!(
        bmp::decode(&encoded),
        Err(CodecError::UnsupportedVariant(_))
    ));
}

#[test]
fn bmp_rejects_truncated_pixel_data() {
    let encoded = bmp::encode(&checkerboard(4, 4)).unwrap();
    let truncated = &encoded[..encoded.len() - 1];
    assert!(matches!(
        bmp::decode(truncated),
        Err(CodecError::UnexpectedEof)
    ));
}

#[test]
fn bmp_rejects_empty_input() {
    assert!(bmp::decode(&[]).is_err());
    assert!(bmp::decode(b"BM").is_err());
}

#[test]
fn bmp_negative_height_uses_magnitude() {
    let img = checkerboard(3, 2);
    let mut encoded = bmp::encode(&img).unwrap();
    // Rewrite the height field as -2; stored rows stay bottom-up.
    encoded[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    let decoded = bmp::decode(&encoded).unwrap();
    assert_eq!(decoded, img);
}

// ── PPM ──────────────────────────────────────────────────────────────

#[test]
fn ppm_roundtrip() {
    let img = noise(5, 4);
    let encoded = ppm::encode(&img).unwrap();
    assert!(encoded.starts_with(b"P6\n5 4\n255\n"));
    let decoded = ppm::decode(&encoded).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn ppm_decode_tolerates_comments() {
    let data = b"P6 # binary ppm\n# comment line\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
    let img = ppm::decode(data).unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 1);
    assert_eq!(img.pixel(0, 0), RGBA8::new(1, 2, 3, 255));
    assert_eq!(img.pixel(1, 0), RGBA8::new(4, 5, 6, 255));
}

#[test]
fn ppm_rejects_bad_magic() {
    assert!(matches!(
        ppm::decode(b"P5\n1 1\n255\n\x00"),
        Err(CodecError::UnrecognizedFormat)
    ));
}

#[test]
fn ppm_rejects_wide_maxval() {
    assert!(matches!(
        ppm::decode(b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00"),
        Err(CodecError::UnsupportedVariant(_))
    ));
}

#[test]
fn ppm_rejects_truncated_pixel_data() {
    assert!(matches!(
        ppm::decode(b"P6\n2 2\n255\n\x01\x02\x03"),
        Err(CodecError::UnexpectedEof)
    ));
}

// ── Cross-format ─────────────────────────────────────────────────────

#[test]
fn bmp_to_ppm_preserves_pixels() {
    let img = checkerboard(2, 2);
    let bmp_bytes = ImageFormat::Bmp.encode(&img).unwrap();
    let loaded = ImageFormat::Bmp.decode(&bmp_bytes).unwrap();
    let ppm_bytes = ImageFormat::Ppm.encode(&loaded).unwrap();
    let reloaded = ImageFormat::Ppm.decode(&ppm_bytes).unwrap();
    assert_eq!(reloaded, img);
}

#[test]
fn jpeg_roundtrip_is_close_on_flat_color() {
    let img = Image::new(32, 24, RGBA8::new(100, 150, 200, 255));
    let encoded = ImageFormat::Jpeg.encode(&img).unwrap();
    assert_eq!(&encoded[0..2], &[0xFF, 0xD8]);
    let decoded = ImageFormat::Jpeg.decode(&encoded).unwrap();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 24);
    for px in decoded.pixels() {
        assert!(px.r.abs_diff(100) <= 8, "r drifted: {}", px.r);
        assert!(px.g.abs_diff(150) <= 8, "g drifted: {}", px.g);
        assert!(px.b.abs_diff(200) <= 8, "b drifted: {}", px.b);
        assert_eq!(px.a, 255);
    }
}

#[test]
fn encode_refuses_empty_image() {
    for format in [ImageFormat::Bmp, ImageFormat::Ppm, ImageFormat::Jpeg] {
        assert!(format.encode(&Image::empty()).is_err());
    }
}
