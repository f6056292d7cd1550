#![doc = r#"
takameru — batch image upscaling with waifu2x.

This crate drives the `waifu2x-ncnn-vulkan` upscaler over whole folders of images or
over CBZ comic archives, assembling each upscaled archive into a multi-page PDF. It
powers the `takameru` (archive) and `mini_takameru` (folder) CLIs and can be embedded
in your own Rust applications.

Requirements
------------
- `waifu2x-ncnn-vulkan` installed, either on `PATH` or at an explicit location.
- A Vulkan-capable GPU, or `--gpu -1` to run on CPU.

Quick start: upscale a CBZ into a PDF
-------------------------------------
```rust,no_run
use std::path::Path;
use takameru::{
    process_archives, ArchiveJob, AlwaysOverwrite, NoProgress, UpscaleConfig, Waifu2x,
};

fn main() -> takameru::Result<()> {
    let config = UpscaleConfig::new(2, 2);
    let job = ArchiveJob::resolve(Path::new("/comics/vol1.cbz"), Path::new("/out"), config)?;
    let upscaler = Waifu2x::new(None, config)?;

    let report = process_archives(&job, &upscaler, &mut AlwaysOverwrite, &mut NoProgress)?;
    println!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Upscale a folder in place
-------------------------
```rust,no_run
use std::path::Path;
use takameru::{process_folder, FolderJob, NoProgress, UpscaleConfig, Waifu2x};

fn main() -> takameru::Result<()> {
    let config = UpscaleConfig::folder_default();
    let job = FolderJob::resolve(Path::new("/scans"), ".png", config)?;
    let upscaler = Waifu2x::new(Some(Path::new("/opt/waifu2x/waifu2x-ncnn-vulkan")), config)?;

    let written = process_folder(&job, &upscaler, &mut NoProgress)?;
    println!("upscaled {written} file(s)");
    Ok(())
}
```

Custom upscalers and prompts
----------------------------
The pipeline talks to the upscaler through the [`Upscaler`] trait and asks before
replacing an existing PDF through [`ConfirmOverwrite`], which closures implement:

```rust,no_run
use std::path::Path;
use image::DynamicImage;
use takameru::{process_archives, ArchiveJob, NoProgress, UpscaleConfig, Upscaler};

struct Nearest(u32);

impl Upscaler for Nearest {
    fn upscale(&self, _name: &str, image: &DynamicImage) -> takameru::Result<DynamicImage> {
        Ok(image.resize_exact(
            image.width() * self.0,
            image.height() * self.0,
            image::imageops::FilterType::Nearest,
        ))
    }
}

fn main() -> takameru::Result<()> {
    let job = ArchiveJob::resolve(Path::new("/comics"), Path::new("/out"), UpscaleConfig::new(2, 0))?;
    let mut never = |_: &Path| false;
    process_archives(&job, &Nearest(2), &mut never, &mut NoProgress)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `takameru::Result<T>`; match on `takameru::Error` to handle
specific cases. A declined overwrite is not an error, it shows up as a skipped unit.

```rust,no_run
use std::path::Path;
use takameru::{extract_pages, Error};

fn main() {
    match extract_pages(Path::new("/comics/vol1.cbz")) {
        Ok(pages) => println!("{} page(s)", pages.len()),
        Err(Error::NotAnArchive { path }) => eprintln!("not a CBZ: {path:?}"),
        Err(Error::CorruptArchive { path, reason }) => eprintln!("{path:?}: {reason}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Feature flags
-------------
- `cli` (default): the `cli` module and both binaries (progress bar, logging setup).

Useful modules
--------------
- [`api`] — high-level pipeline entry points.
- [`core`] — job resolution, progress reporting and the upscale stage.
- [`io`] — folder and CBZ enumeration, image and PDF writers.
- [`upscaler`] — the [`Upscaler`] trait and the waifu2x backend.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;
pub mod upscaler;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

// Curated public API surface
// Types
pub use crate::core::params::{ArchiveJob, ArchiveUnit, FolderJob, UpscaleConfig};
pub use crate::core::progress::{NoProgress, Progress};
pub use error::{Error, Result};
pub use types::{ImageSource, OutputTarget, UpscaleResult};

// Enumerators and writers
pub use io::writers::{write_in_place, write_pdf};
pub use io::{discover_archives, extract_pages, list_matching, load_matching};

// Upscaling
pub use crate::core::upscale::upscale_all;
pub use upscaler::{Upscaler, Waifu2x};

// High-level API re-exports
pub use api::{
    AlwaysOverwrite, BatchReport, ConfirmOverwrite, UnitOutcome, process_archive,
    process_archives, process_folder, write_results,
};
