//! High-level, ergonomic library API: run the folder pipeline in place, turn one CBZ
//! into an upscaled PDF, or batch every archive of a resolved job. Prefer these
//! entrypoints over the low-level `io` and `core` modules when integrating takameru.
use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::core::params::{ArchiveJob, ArchiveUnit, FolderJob};
use crate::core::progress::Progress;
use crate::core::upscale::upscale_all;
use crate::error::{Error, Result};
use crate::io::writers::{write_in_place, write_pdf};
use crate::io::{extract_pages, load_matching};
use crate::types::{OutputTarget, UpscaleResult};
use crate::upscaler::Upscaler;

/// Decides whether an existing output file may be replaced.
pub trait ConfirmOverwrite {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

impl<F: FnMut(&Path) -> bool> ConfirmOverwrite for F {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        Ok(self(path))
    }
}

/// Replaces existing outputs without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysOverwrite;

impl ConfirmOverwrite for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// What happened to a single archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    Written { pages: usize },
    /// The target existed and overwriting was declined.
    Skipped,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

/// Upscale every matching image of `job.dir` and write each back over its source.
/// Returns the number of files written.
pub fn process_folder(
    job: &FolderJob,
    upscaler: &dyn Upscaler,
    progress: &mut dyn Progress,
) -> Result<usize> {
    let sources = load_matching(&job.dir, &job.filter)?;
    let results = upscale_all(sources, upscaler, progress)?;

    let written = write_results(results, &OutputTarget::Directory(job.dir.clone()))?;
    info!("Upscaled {} file(s) in {:?}", written, job.dir);
    Ok(written)
}

/// Persist `results` to `target`: one file each into a directory, or all of them as
/// the pages of one PDF. Returns how many images were written.
pub fn write_results(results: Vec<UpscaleResult>, target: &OutputTarget) -> Result<usize> {
    match target {
        OutputTarget::Directory(dir) => {
            for result in &results {
                write_in_place(dir, result)?;
            }
            Ok(results.len())
        }
        OutputTarget::File(path) => {
            let images: Vec<DynamicImage> = results.into_iter().map(|r| r.image).collect();
            write_pdf(&images, path)?;
            Ok(images.len())
        }
    }
}

/// Extract, upscale and assemble one archive into its target PDF.
///
/// An existing target is only replaced after `confirm` agrees; it is asked before
/// any work starts and the old file is removed right before the new one is written.
pub fn process_archive(
    unit: &ArchiveUnit,
    upscaler: &dyn Upscaler,
    confirm: &mut dyn ConfirmOverwrite,
    progress: &mut dyn Progress,
) -> Result<UnitOutcome> {
    let replace = unit.target.is_file();
    if replace && !confirm.confirm_overwrite(&unit.target)? {
        info!("Keeping existing {:?}", unit.target);
        return Ok(UnitOutcome::Skipped);
    }

    let archive_name = unit
        .archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    progress.message(&format!("Processing {archive_name}..."));
    progress.message("Extracting images...");
    let pages = extract_pages(&unit.archive)?;

    let results = upscale_all(pages, upscaler, progress)?;
    if results.is_empty() {
        return Err(Error::EmptyResultSet {
            path: unit.target.clone(),
        });
    }

    if replace {
        fs::remove_file(&unit.target)?;
    }
    progress.message(&format!("Saving in {}...", unit.target.display()));
    let pages = write_results(results, &OutputTarget::File(unit.target.clone()))?;

    Ok(UnitOutcome::Written { pages })
}

/// Process every unit of `job` in order. The first error aborts the batch; declined
/// overwrites are counted as skipped.
pub fn process_archives(
    job: &ArchiveJob,
    upscaler: &dyn Upscaler,
    confirm: &mut dyn ConfirmOverwrite,
    progress: &mut dyn Progress,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for unit in &job.units {
        info!("Processing: {:?} -> {:?}", unit.archive, unit.target);
        match process_archive(unit, upscaler, confirm, progress)? {
            UnitOutcome::Written { pages } => {
                info!("Successfully wrote {} page(s) to {:?}", pages, unit.target);
                report.processed += 1;
            }
            UnitOutcome::Skipped => report.skipped += 1,
        }
    }

    info!(
        "Batch complete: processed={} skipped={}",
        report.processed, report.skipped
    );
    Ok(report)
}
