//! takameru CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, upscale one CBZ or every CBZ of a
//! directory into PDFs, and exit with appropriate status. For programmatic use,
//! prefer the library API (`takameru::api`).

use clap::Parser;

use takameru::cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::TakameruArgs::parse();
    cli::run_takameru(args)
}
