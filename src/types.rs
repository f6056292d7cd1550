//! Shared types used across takameru.
//! Includes the pipeline values (`ImageSource`, `UpscaleResult`), the output
//! destination (`OutputTarget`) and the constants that define what counts as an
//! archive or an archive page.
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat};

/// Extension (matched anywhere in the file name) that marks a comic archive.
pub const ARCHIVE_EXTENSION: &str = ".cbz";

/// Extension the archive extension is replaced with for the output document.
pub const DOCUMENT_EXTENSION: &str = ".pdf";

/// Archive members with one of these suffixes are treated as pages (case-sensitive).
pub const PAGE_EXTENSIONS: [&str; 3] = [".jpg", ".png", ".jpeg"];

/// Scale ratios accepted by waifu2x.
pub const SUPPORTED_SCALES: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Denoise levels accepted by waifu2x (-1 disables denoising).
pub const SUPPORTED_NOISE_LEVELS: [i32; 5] = [-1, 0, 1, 2, 3];

/// A decoded image together with the name it was found under.
#[derive(Debug, Clone)]
pub struct ImageSource {
    /// File name (folder mode) or base name of the archive entry (archive mode).
    pub name: String,
    /// Container format detected while decoding, if any.
    pub format: Option<ImageFormat>,
    pub image: DynamicImage,
}

/// Upscaled counterpart of an [`ImageSource`], same name and position.
#[derive(Debug, Clone)]
pub struct UpscaleResult {
    pub name: String,
    pub format: Option<ImageFormat>,
    pub image: DynamicImage,
}

/// Where a unit's results end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One file per result, written as `{dir}/{name}`.
    Directory(PathBuf),
    /// A single multi-page document.
    File(PathBuf),
}

/// Whether an archive entry name qualifies as a page image.
pub fn is_page_name(name: &str) -> bool {
    PAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_are_case_sensitive() {
        assert!(is_page_name("001.jpg"));
        assert!(is_page_name("dir/002.jpeg"));
        assert!(is_page_name("003.png"));
        assert!(!is_page_name("004.JPG"));
        assert!(!is_page_name("ComicInfo.xml"));
        assert!(!is_page_name("pages/"));
    }
}
