use std::path::PathBuf;

use clap::{Args, Parser};

use crate::upscaler::waifu2x::DEFAULT_GPU;

/// Upscales a CBZ file or all CBZ files in a folder into PDFs
#[derive(Parser, Debug)]
#[command(name = "takameru", version, about)]
pub struct TakameruArgs {
    /// CBZ file, or directory containing CBZ files
    pub fp: PathBuf,

    /// Output PDF for a single file; existing output directory for a directory input
    pub output: PathBuf,

    /// Denoise level (-1/0/1/2/3)
    #[arg(short, long = "noise-level", default_value_t = 2, allow_negative_numbers = true)]
    pub noise: i32,

    /// Upscale ratio (1/2/4/8/16/32)
    #[arg(short, long, default_value_t = 2)]
    pub scale: u32,

    /// Overwrite existing PDFs without asking
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    #[command(flatten)]
    pub upscaler: UpscalerArgs,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Upscale all files in a folder, in place
#[derive(Parser, Debug)]
#[command(name = "mini_takameru", version, about)]
pub struct MiniTakameruArgs {
    /// Input folder
    pub dir: PathBuf,

    /// Denoise level (-1/0/1/2/3)
    #[arg(short, long = "noise-level", default_value_t = 0, allow_negative_numbers = true)]
    pub noise: i32,

    /// Upscale ratio (1/2/4/8/16/32)
    #[arg(short, long, default_value_t = 2)]
    pub scale: u32,

    /// Input file suffix filter, e.g. ".png" (default: all files)
    #[arg(short, long, default_value = "")]
    pub format: String,

    #[command(flatten)]
    pub upscaler: UpscalerArgs,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Options locating and placing the external upscaler
#[derive(Args, Debug)]
pub struct UpscalerArgs {
    /// Path to the waifu2x-ncnn-vulkan executable (default: search PATH)
    #[arg(long = "waifu2x", env = "TAKAMERU_WAIFU2X", value_name = "PATH")]
    pub program: Option<PathBuf>,

    /// GPU device id (-1 runs on CPU)
    #[arg(long, default_value_t = DEFAULT_GPU, allow_negative_numbers = true)]
    pub gpu: i32,
}
