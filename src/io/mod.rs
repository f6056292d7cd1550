//! I/O layer: source enumeration (`folder` listings and `cbz` archives) and the
//! `writers` that persist upscaled results.
pub mod cbz;
pub use cbz::{discover_archives, extract_pages};

pub mod folder;
pub use folder::{list_matching, load_matching};

pub mod writers;
