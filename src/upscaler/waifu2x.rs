//! waifu2x backend driven through the `waifu2x-ncnn-vulkan` executable.
//!
//! Each call round-trips the image through PNG files in a private scratch
//! directory that lives as long as the [`Waifu2x`] value.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::core::params::UpscaleConfig;
use crate::error::{Error, Result};
use crate::types::{SUPPORTED_NOISE_LEVELS, SUPPORTED_SCALES};

use super::Upscaler;

/// Executable looked up on `PATH` when no explicit path is given.
pub const PROGRAM_NAME: &str = "waifu2x-ncnn-vulkan";

/// Environment variable the CLI reads the executable path from.
pub const PROGRAM_ENV: &str = "TAKAMERU_WAIFU2X";

pub const DEFAULT_GPU: i32 = 0;

/// Processing threads handed to the upscaler (`-j load:proc:save`).
pub const DEFAULT_THREADS: u32 = 4;

#[derive(Debug)]
pub struct Waifu2x {
    program: PathBuf,
    config: UpscaleConfig,
    gpu: i32,
    threads: u32,
    scratch: TempDir,
}

impl Waifu2x {
    /// Create an upscaler, using `program` or else the executable found on `PATH`.
    pub fn new(program: Option<&Path>, config: UpscaleConfig) -> Result<Self> {
        let program = match program {
            Some(p) => p.to_path_buf(),
            None => locate()?,
        };
        Self::with_program(program, config)
    }

    pub fn with_program(program: PathBuf, config: UpscaleConfig) -> Result<Self> {
        validate(config)?;
        let scratch = tempfile::Builder::new()
            .prefix("takameru-")
            .tempdir()
            .map_err(|e| Error::UpscalerInit(format!("cannot create scratch directory: {e}")))?;

        info!(
            "waifu2x ready: {:?} scale={} noise={} gpu={} threads={}",
            program, config.scale, config.noise, DEFAULT_GPU, DEFAULT_THREADS
        );
        Ok(Self {
            program,
            config,
            gpu: DEFAULT_GPU,
            threads: DEFAULT_THREADS,
            scratch,
        })
    }

    /// Select the GPU device (`-1` runs on CPU).
    pub fn with_gpu(mut self, gpu: i32) -> Self {
        self.gpu = gpu;
        self
    }

    pub fn config(&self) -> UpscaleConfig {
        self.config
    }
}

impl Upscaler for Waifu2x {
    fn upscale(&self, name: &str, image: &DynamicImage) -> Result<DynamicImage> {
        let failure = |message: String| Error::UpscalerFailure {
            name: name.to_string(),
            message,
        };

        let input = self.scratch.path().join("input.png");
        let output = self.scratch.path().join("output.png");
        image
            .save_with_format(&input, ImageFormat::Png)
            .map_err(|e| failure(format!("cannot stage input: {e}")))?;
        if output.exists() {
            fs::remove_file(&output)?;
        }

        let mut cmd = Command::new(&self.program);
        cmd.arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("-n")
            .arg(self.config.noise.to_string())
            .arg("-s")
            .arg(self.config.scale.to_string())
            .arg("-g")
            .arg(self.gpu.to_string())
            .arg("-j")
            .arg(format!("1:{}:1", self.threads))
            .arg("-f")
            .arg("png");
        debug!("Running {:?}", cmd);

        let out = cmd
            .output()
            .map_err(|e| failure(format!("failed to spawn {:?}: {e}", self.program)))?;
        if !out.status.success() {
            return Err(failure(format!(
                "exited with status {}: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        image::open(&output).map_err(|e| failure(format!("cannot read output: {e}")))
    }
}

/// Find the waifu2x executable on `PATH`.
pub fn locate() -> Result<PathBuf> {
    which::which(PROGRAM_NAME).map_err(|e| {
        Error::UpscalerInit(format!(
            "{PROGRAM_NAME} not found ({e}); install it or pass its path via --waifu2x or {PROGRAM_ENV}"
        ))
    })
}

/// Reject scale/noise values waifu2x does not accept.
pub fn validate(config: UpscaleConfig) -> Result<()> {
    if !SUPPORTED_SCALES.contains(&config.scale) {
        return Err(Error::UpscalerInit(format!(
            "unsupported scale {} (expected one of {:?})",
            config.scale, SUPPORTED_SCALES
        )));
    }
    if !SUPPORTED_NOISE_LEVELS.contains(&config.noise) {
        return Err(Error::UpscalerInit(format!(
            "unsupported noise level {} (expected one of {:?})",
            config.noise, SUPPORTED_NOISE_LEVELS
        )));
    }
    Ok(())
}
