//! Folder reading: list the images of a directory that match a suffix filter.
use std::fs;
use std::path::Path;

use image::ImageReader;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::ImageSource;

/// Names of the regular files in `dir` ending with `filter`, in listing order.
/// An empty filter matches everything.
pub fn list_matching(dir: &Path, filter: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(filter) {
            continue;
        }
        if !entry.path().is_file() {
            debug!("Skipping non-file entry {}", name);
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// Decode every file of `dir` matching `filter`.
///
/// Fails on the first entry that is not a decodable image.
pub fn load_matching(dir: &Path, filter: &str) -> Result<Vec<ImageSource>> {
    let names = list_matching(dir, filter)?;
    info!("Found {} file(s) matching {:?} in {:?}", names.len(), filter, dir);

    names
        .into_iter()
        .map(|name| -> Result<ImageSource> {
            let path = dir.join(&name);
            let reader = ImageReader::open(&path)?.with_guessed_format()?;
            let format = reader.format();
            let image = reader.decode().map_err(|e| Error::UnsupportedImageFormat {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            Ok(ImageSource {
                name,
                format,
                image,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        RgbImage::new(4, 3).save(tmp.path().join("a.png")).unwrap();
        RgbImage::new(2, 2).save(tmp.path().join("b.jpg")).unwrap();
        fs::write(tmp.path().join("c.txt"), b"plain text").unwrap();
        tmp
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn empty_filter_lists_everything() {
        let tmp = fixture();
        let names = sorted(list_matching(tmp.path(), "").unwrap());
        assert_eq!(names, ["a.png", "b.jpg", "c.txt"]);
    }

    #[test]
    fn suffix_filter_narrows_listing() {
        let tmp = fixture();
        assert_eq!(list_matching(tmp.path(), ".png").unwrap(), ["a.png"]);
        assert!(list_matching(tmp.path(), ".webp").unwrap().is_empty());
    }

    #[test]
    fn non_image_match_fails_to_decode() {
        let tmp = fixture();
        let err = load_matching(tmp.path(), "").unwrap_err();
        assert!(matches!(err, Error::UnsupportedImageFormat { path, .. } if path.ends_with("c.txt")));
    }

    #[test]
    fn decodes_filtered_images() {
        let tmp = fixture();
        let sources = load_matching(tmp.path(), ".png").unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "a.png");
        assert_eq!(sources[0].format, Some(ImageFormat::Png));
        assert_eq!((sources[0].image.width(), sources[0].image.height()), (4, 3));
    }

    #[test]
    fn subdirectories_are_not_listed() {
        let tmp = fixture();
        fs::create_dir(tmp.path().join("nested.png")).unwrap();
        assert_eq!(list_matching(tmp.path(), ".png").unwrap(), ["a.png"]);
    }
}
