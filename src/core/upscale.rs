use tracing::debug;

use crate::core::progress::Progress;
use crate::error::Result;
use crate::types::{ImageSource, UpscaleResult};
use crate::upscaler::Upscaler;

/// Upscale `sources` one at a time, preserving order.
///
/// Each source is dropped once its result exists. The first failure aborts the
/// remaining items.
pub fn upscale_all(
    sources: Vec<ImageSource>,
    upscaler: &dyn Upscaler,
    progress: &mut dyn Progress,
) -> Result<Vec<UpscaleResult>> {
    progress.start(sources.len());

    let mut results = Vec::with_capacity(sources.len());
    for source in sources {
        progress.item(&source.name);
        debug!(
            "Upscaling {} ({}x{})",
            source.name,
            source.image.width(),
            source.image.height()
        );
        let image = upscaler.upscale(&source.name, &source.image)?;
        results.push(UpscaleResult {
            name: source.name,
            format: source.format,
            image,
        });
    }

    progress.finish();
    Ok(results)
}
