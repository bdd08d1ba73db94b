//! Extension-to-codec dispatch.

use std::path::Path;

use crate::error::CodecError;
use crate::image::Image;
use crate::{bmp, jpeg, ppm};

/// The closed set of on-disk formats the converter understands.
///
/// Codecs are stateless; a format tag is all the dispatch needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Ppm,
    Jpeg,
}

impl ImageFormat {
    /// Resolve a codec from a path's filename extension.
    ///
    /// Comparison is ASCII case-insensitive; `jpg` and `jpeg` both map
    /// to JPEG. Returns `None` for an unrecognized tag or a path with
    /// no extension — the caller decides whether that is an error.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Resolve a codec from a bare extension (no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Some(Self::Bmp),
            "ppm" => Some(Self::Ppm),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Decode `data` with this format's codec.
    pub fn decode(self, data: &[u8]) -> Result<Image, CodecError> {
        match self {
            Self::Bmp => bmp::decode(data),
            Self::Ppm => ppm::decode(data),
            Self::Jpeg => jpeg::decode(data),
        }
    }

    /// Encode `image` with this format's codec.
    pub fn encode(self, image: &Image) -> Result<Vec<u8>, CodecError> {
        if image.is_empty() {
            return Err(CodecError::InvalidHeader(
                "refusing to encode an empty image".into(),
            ));
        }
        match self {
            Self::Bmp => bmp::encode(image),
            Self::Ppm => ppm::encode(image),
            Self::Jpeg => jpeg::encode(image),
        }
    }
}
