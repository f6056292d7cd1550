//! Command Line Interface (CLI) layer shared by both binaries.
//!
//! This module defines argument parsing (`args`), the terminal progress bar
//! (`progress`), the overwrite question (`prompt`) and the orchestration logic
//! (`runner`) for the archive tool (`takameru`) and the folder tool
//! (`mini_takameru`). It wires user-provided options to `takameru::api`.
//!
//! If you are embedding takameru into another application, prefer using the
//! high-level `takameru::api` module instead of calling the CLI code.
pub mod args;
pub mod progress;
pub mod prompt;
pub mod runner;

pub use args::{MiniTakameruArgs, TakameruArgs};
pub use runner::{run_mini_takameru, run_takameru};
