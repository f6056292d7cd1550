//! mini_takameru CLI entrypoint: upscale every (optionally filtered) image of a
//! folder in place.

use clap::Parser;

use takameru::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::MiniTakameruArgs::parse();
    cli::run_mini_takameru(args)
}
