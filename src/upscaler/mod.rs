//! The upscaling capability consumed by the pipeline, and its waifu2x backend.
//!
//! The pipeline only ever sees [`Upscaler`]: one synchronous call per image. Any
//! internal parallelism belongs to the implementation.
use image::DynamicImage;

use crate::error::Result;

pub mod waifu2x;
pub use waifu2x::Waifu2x;

pub trait Upscaler {
    /// Upscale one image. `name` identifies the source in errors and logs.
    fn upscale(&self, name: &str, image: &DynamicImage) -> Result<DynamicImage>;
}
