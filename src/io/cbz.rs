//! CBZ reading: discover archives in a directory and extract their page images.
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::types::{ARCHIVE_EXTENSION, ImageSource, is_page_name};

/// Upper bound on the buffer reserved up front for one member; the declared size
/// comes from the archive itself.
const MAX_PREALLOC: usize = 64 * 1024 * 1024;

/// List the regular files of `dir` whose name contains the archive extension.
///
/// Single, non-recursive listing; order is the directory's listing order.
pub fn discover_archives(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().contains(ARCHIVE_EXTENSION));
        if is_archive && path.is_file() {
            archives.push(path);
        } else {
            debug!("Skipping {:?}", path);
        }
    }
    Ok(archives)
}

/// Extract every page image of a CBZ archive, in archive member order.
///
/// Pages are members ending in `.jpg`, `.jpeg` or `.png`; names are returned without
/// their directory prefix.
pub fn extract_pages(path: &Path) -> Result<Vec<ImageSource>> {
    if !path.to_string_lossy().contains(ARCHIVE_EXTENSION) {
        return Err(Error::NotAnArchive {
            path: path.to_path_buf(),
        });
    }

    info!("Extracting images from {:?}", path);
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| Error::corrupt_archive(path, e))?;

    let mut pages = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::corrupt_archive(path, e))?;
        let entry_name = entry.name().to_string();
        if !is_page_name(&entry_name) {
            debug!("Ignoring archive member {}", entry_name);
            continue;
        }

        let mut bytes = Vec::with_capacity(capacity_hint(entry.size()));
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| Error::corrupt_archive(path, format!("{entry_name}: {e}")))?;

        let format = image::guess_format(&bytes).ok();
        let image = image::load_from_memory(&bytes)
            .map_err(|e| Error::corrupt_archive(path, format!("{entry_name}: {e}")))?;

        pages.push(ImageSource {
            name: base_name(&entry_name).to_string(),
            format,
            image,
        });
    }

    debug!("Extracted {} page(s) from {:?}", pages.len(), path);
    Ok(pages)
}

fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared).map_or(MAX_PREALLOC, |n| n.min(MAX_PREALLOC))
}

/// Archive member names always use `/` as separator.
fn base_name(entry_name: &str) -> &str {
    entry_name.rsplit('/').next().unwrap_or(entry_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]))
            .write_to(&mut buf, format)
            .unwrap();
        buf.into_inner()
    }

    fn write_archive(path: &Path, members: &[(&str, Vec<u8>)]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, bytes) in members {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(bytes).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn extracts_pages_in_member_order_with_base_names() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("book.cbz");
        write_archive(
            &path,
            &[
                ("page2.jpg", encoded(3, 2, ImageFormat::Jpeg)),
                ("ComicInfo.xml", b"<ComicInfo/>".to_vec()),
                ("page1.jpg", encoded(5, 4, ImageFormat::Jpeg)),
                ("chapter/page3.png", encoded(7, 6, ImageFormat::Png)),
                ("LOUD.JPG", encoded(1, 1, ImageFormat::Jpeg)),
            ],
        );

        let pages = extract_pages(&path).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["page2.jpg", "page1.jpg", "page3.png"]);
        assert_eq!(pages[0].image.width(), 3);
        assert_eq!(pages[1].image.width(), 5);
        assert_eq!(pages[2].format, Some(ImageFormat::Png));
    }

    #[test]
    fn archive_without_pages_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.cbz");
        write_archive(&path, &[("readme.txt", b"hi".to_vec())]);
        assert!(extract_pages(&path).unwrap().is_empty());
    }

    #[test]
    fn rejects_paths_without_archive_extension() {
        let err = extract_pages(Path::new("book.zip")).unwrap_err();
        assert!(matches!(err, Error::NotAnArchive { .. }));
    }

    #[test]
    fn garbage_container_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.cbz");
        fs::write(&path, b"definitely not a zip file").unwrap();
        assert!(matches!(
            extract_pages(&path),
            Err(Error::CorruptArchive { .. })
        ));
    }

    #[test]
    fn undecodable_page_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.cbz");
        write_archive(&path, &[("page.png", b"not png".to_vec())]);
        assert!(matches!(
            extract_pages(&path),
            Err(Error::CorruptArchive { .. })
        ));
    }

    #[test]
    fn declared_sizes_do_not_drive_allocation() {
        assert_eq!(capacity_hint(0), 0);
        assert_eq!(capacity_hint(4096), 4096);
        assert_eq!(capacity_hint(0x7FFF_FFFF_FFFF_FF00), MAX_PREALLOC);
        assert_eq!(capacity_hint(u64::MAX), MAX_PREALLOC);
    }

    #[test]
    fn oversized_declared_member_does_not_abort() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("huge.cbz");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file("p.png", stored).unwrap();
        zip.write_all(&encoded(2, 2, ImageFormat::Png)).unwrap();
        zip.finish().unwrap();

        // Claim a ~4 GiB uncompressed size in the central directory entry.
        let mut bytes = fs::read(&path).unwrap();
        let central = bytes
            .windows(4)
            .position(|w| w == b"PK\x01\x02")
            .unwrap();
        bytes[central + 24..central + 28].copy_from_slice(&0xFFFF_FF00u32.to_le_bytes());
        fs::write(&path, &bytes).unwrap();

        match extract_pages(&path) {
            Ok(pages) => assert_eq!(pages.len(), 1),
            Err(e) => assert!(matches!(e, Error::CorruptArchive { .. }), "{e}"),
        }
    }

    #[test]
    fn discovers_only_archive_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.cbz"), b"").unwrap();
        fs::write(tmp.path().join("b.cbz.bak"), b"").unwrap();
        fs::write(tmp.path().join("c.txt"), b"").unwrap();
        fs::create_dir(tmp.path().join("d.cbz")).unwrap();

        let mut found: Vec<_> = discover_archives(tmp.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        found.sort();
        assert_eq!(found, ["a.cbz", "b.cbz.bak"]);
    }
}
