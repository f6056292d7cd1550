use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{AlwaysOverwrite, ConfirmOverwrite, process_archives, process_folder};
use crate::core::params::{ArchiveJob, FolderJob, UpscaleConfig};
use crate::upscaler::Waifu2x;

use super::args::{MiniTakameruArgs, TakameruArgs, UpscalerArgs};
use super::progress::BarProgress;
use super::prompt::LinePrompt;

fn init_logging(enabled: bool) {
    if enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn start_upscaler(args: &UpscalerArgs, config: UpscaleConfig) -> crate::Result<Waifu2x> {
    let upscaler = Waifu2x::new(args.program.as_deref(), config)?.with_gpu(args.gpu);
    info!("Upscaler config: {:?}", upscaler.config());
    Ok(upscaler)
}

/// Archive tool: every resolved CBZ becomes an upscaled PDF.
pub fn run_takameru(args: TakameruArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let job = ArchiveJob::resolve(
        &args.fp,
        &args.output,
        UpscaleConfig::new(args.scale, args.noise),
    )?;
    info!("Input: {:?}, output: {:?}", args.fp, args.output);

    println!("Starting waifu2x...");
    let upscaler = start_upscaler(&args.upscaler, job.config)?;

    let mut confirm: Box<dyn ConfirmOverwrite> = if args.yes {
        Box::new(AlwaysOverwrite)
    } else {
        Box::new(LinePrompt::stdio())
    };
    let mut progress = BarProgress::new();
    let report = process_archives(&job, &upscaler, confirm.as_mut(), &mut progress)?;

    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    println!("Done!");
    Ok(())
}

/// Folder tool: matching images are upscaled and overwritten in place.
pub fn run_mini_takameru(args: MiniTakameruArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let job = FolderJob::resolve(
        &args.dir,
        &args.format,
        UpscaleConfig::new(args.scale, args.noise),
    )?;
    let upscaler = start_upscaler(&args.upscaler, job.config)?;

    let mut progress = BarProgress::new();
    let written = process_folder(&job, &upscaler, &mut progress)?;

    info!("Upscaled {} file(s)", written);
    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn explicit_program() -> UpscalerArgs {
        UpscalerArgs {
            program: Some(PathBuf::from("/opt/waifu2x/waifu2x-ncnn-vulkan")),
            gpu: -1,
        }
    }

    #[test]
    fn upscaler_runs_with_the_resolved_job_config() {
        let tmp = TempDir::new().unwrap();
        let job = FolderJob::resolve(tmp.path(), ".png", UpscaleConfig::new(4, -1)).unwrap();

        let upscaler = start_upscaler(&explicit_program(), job.config).unwrap();
        assert_eq!(upscaler.config(), job.config);
    }

    #[test]
    fn job_config_out_of_range_fails_at_startup() {
        let tmp = TempDir::new().unwrap();
        let job = FolderJob::resolve(tmp.path(), "", UpscaleConfig::new(3, 0)).unwrap();

        assert!(matches!(
            start_upscaler(&explicit_program(), job.config),
            Err(Error::UpscalerInit(_))
        ));
    }
}
