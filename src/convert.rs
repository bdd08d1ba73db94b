//! Conversion driver: resolve codecs for both paths, load, validate,
//! save. Linear pipeline, no retries — the first failure ends the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CodecError;
use crate::format::ImageFormat;

/// A conversion failure, classified for exit-status reporting.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown format of the input file")]
    UnknownInputFormat,

    #[error("unknown format of the output file")]
    UnknownOutputFormat,

    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("loading failed: {0}")]
    Load(#[source] CodecError),

    #[error("loading failed: image is empty or corrupted")]
    EmptyImage,

    #[error("saving failed: {0}")]
    Save(#[source] CodecError),
}

impl ConvertError {
    /// Process exit status for this failure.
    ///
    /// Exit 1 is reserved for argument-count errors, which never reach
    /// the driver.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownInputFormat => 2,
            Self::UnknownOutputFormat => 3,
            Self::Load(_) | Self::EmptyImage => 4,
            Self::Save(_) => 5,
            Self::MissingInput(_) => 6,
        }
    }
}

/// Convert `in_path` to `out_path`, picking both codecs by extension.
///
/// Both codecs are resolved before any I/O happens, so an unknown
/// output format never creates or truncates the destination file.
pub fn convert(in_path: &Path, out_path: &Path) -> Result<(), ConvertError> {
    if !in_path.exists() {
        return Err(ConvertError::MissingInput(in_path.to_path_buf()));
    }
    let in_format = ImageFormat::from_path(in_path).ok_or(ConvertError::UnknownInputFormat)?;
    let out_format = ImageFormat::from_path(out_path).ok_or(ConvertError::UnknownOutputFormat)?;
    debug!(?in_format, ?out_format, "resolved codecs");

    let data = fs::read(in_path).map_err(|e| ConvertError::Load(e.into()))?;
    let image = in_format.decode(&data).map_err(ConvertError::Load)?;
    if image.is_empty() {
        return Err(ConvertError::EmptyImage);
    }
    debug!(width = image.width(), height = image.height(), "loaded image");

    let encoded = out_format.encode(&image).map_err(ConvertError::Save)?;
    fs::write(out_path, &encoded).map_err(|e| ConvertError::Save(e.into()))?;
    debug!(bytes = encoded.len(), "wrote output");

    Ok(())
}
