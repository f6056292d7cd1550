use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::Result;
use crate::types::UpscaleResult;

/// Write `result` to `{dir}/{name}`, replacing the file it was read from.
///
/// The format follows the file extension, falling back to the format detected at
/// decode time.
pub fn write_in_place(dir: &Path, result: &UpscaleResult) -> Result<()> {
    let path = dir.join(&result.name);
    let format = ImageFormat::from_path(&path)
        .ok()
        .or(result.format)
        .unwrap_or(ImageFormat::Png);

    debug!("Writing {:?} as {:?}", path, format);
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(result.image.to_rgb8())
            .save_with_format(&path, format)?,
        _ => result.image.save_with_format(&path, format)?,
    }
    Ok(())
}
