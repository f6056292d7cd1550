use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::cbz::discover_archives;
use crate::types::{ARCHIVE_EXTENSION, DOCUMENT_EXTENSION};

/// Upscaler parameters suitable for presets; shared read-only by every call in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpscaleConfig {
    /// Magnification ratio (1/2/4/8/16/32)
    pub scale: u32,
    /// Denoise level (-1/0/1/2/3)
    pub noise: i32,
}

impl UpscaleConfig {
    pub const fn new(scale: u32, noise: i32) -> Self {
        Self { scale, noise }
    }

    /// Defaults of the folder tool.
    pub const fn folder_default() -> Self {
        Self::new(2, 0)
    }

    /// Defaults of the archive tool.
    pub const fn archive_default() -> Self {
        Self::new(2, 2)
    }
}

impl Default for UpscaleConfig {
    fn default() -> Self {
        Self::folder_default()
    }
}

/// A validated folder-mode invocation.
#[derive(Debug, Clone)]
pub struct FolderJob {
    pub dir: PathBuf,
    /// Suffix filter; empty matches every entry.
    pub filter: String,
    pub config: UpscaleConfig,
}

impl FolderJob {
    pub fn resolve(dir: &Path, filter: &str, config: UpscaleConfig) -> Result<Self> {
        if !dir.exists() {
            return Err(Error::InvalidInputPath {
                path: dir.to_path_buf(),
                reason: "the input path does not exist",
            });
        }
        if !dir.is_dir() {
            return Err(Error::InvalidInputPath {
                path: dir.to_path_buf(),
                reason: "the input path is not a directory",
            });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            filter: filter.to_string(),
            config,
        })
    }
}

/// One archive and the document it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveUnit {
    pub archive: PathBuf,
    pub target: PathBuf,
}

/// A validated archive-mode invocation: every unit to process, in listing order.
#[derive(Debug, Clone)]
pub struct ArchiveJob {
    pub units: Vec<ArchiveUnit>,
    pub config: UpscaleConfig,
}

impl ArchiveJob {
    /// Resolve `input` (an archive or a directory of archives) against `output`.
    ///
    /// A directory input requires `output` to be an existing directory; each archive
    /// found by a single listing becomes `{output}/{basename}.pdf`. A file input writes
    /// to `output` itself, unless `output` is an existing directory; its name must
    /// carry the archive extension.
    pub fn resolve(input: &Path, output: &Path, config: UpscaleConfig) -> Result<Self> {
        let units = if input.is_file() {
            if !is_archive_name(input) {
                return Err(Error::NotAnArchive {
                    path: input.to_path_buf(),
                });
            }
            let target = if output.is_dir() {
                output.join(document_name(input))
            } else {
                output.to_path_buf()
            };
            vec![ArchiveUnit {
                archive: input.to_path_buf(),
                target,
            }]
        } else if input.is_dir() {
            if !output.is_dir() {
                return Err(Error::InvalidInputPath {
                    path: output.to_path_buf(),
                    reason: "the output path does not exist",
                });
            }
            discover_archives(input)?
                .into_iter()
                .map(|archive| {
                    let target = output.join(document_name(&archive));
                    ArchiveUnit { archive, target }
                })
                .collect()
        } else {
            return Err(Error::InvalidInputPath {
                path: input.to_path_buf(),
                reason: "the input path does not exist",
            });
        };

        debug!("Resolved {} archive unit(s) from {:?}", units.len(), input);
        Ok(Self { units, config })
    }
}

fn is_archive_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().contains(ARCHIVE_EXTENSION))
}

/// `book.cbz` -> `book.pdf`; every occurrence of the archive extension is replaced.
pub fn document_name(archive: &Path) -> String {
    archive
        .file_name()
        .map(|n| n.to_string_lossy().replace(ARCHIVE_EXTENSION, DOCUMENT_EXTENSION))
        .unwrap_or_default()
}
