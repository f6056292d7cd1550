//! Crate-level error type and `Result` alias for stable, structured error handling.
//! One variant per failure the pipelines can hit: path validation, archive reading,
//! image decoding, the external upscaler, and output assembly.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input path {path:?}: {reason}")]
    InvalidInputPath { path: PathBuf, reason: &'static str },

    #[error("Not a CBZ archive: {path:?}")]
    NotAnArchive { path: PathBuf },

    #[error("Corrupt archive {path:?}: {reason}")]
    CorruptArchive { path: PathBuf, reason: String },

    #[error("Unsupported image format for {path:?}: {reason}")]
    UnsupportedImageFormat { path: PathBuf, reason: String },

    #[error("Failed to start upscaler: {0}")]
    UpscalerInit(String),

    #[error("Upscaler failed on {name}: {message}")]
    UpscalerFailure { name: String, message: String },

    #[error("No images to write to {path:?}")]
    EmptyResultSet { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    Pdf(String),
}

impl Error {
    pub fn corrupt_archive<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::CorruptArchive {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn pdf<E: std::fmt::Display>(e: E) -> Self {
        Error::Pdf(e.to_string())
    }
}
