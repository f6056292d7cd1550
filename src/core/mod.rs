//! Core building blocks: the config resolver (`params`), progress reporting, and
//! the sequential upscale stage. Consumed by the high-level `api` module.
pub mod params;
pub mod progress;
pub mod upscale;
