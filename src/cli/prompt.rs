use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use crate::api::ConfirmOverwrite;
use crate::error::Result;

/// Yes/no overwrite question asked on a line-based terminal.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for LinePrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        write!(
            self.output,
            "{} already exists. Do you wish to overwrite it? (y/N) ",
            path.display()
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
