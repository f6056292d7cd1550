/// Receives pipeline progress. Every method defaults to doing nothing.
pub trait Progress {
    /// A free-form status line ("Extracting images...").
    fn message(&mut self, _text: &str) {}
    /// A batch of `total` items is about to be upscaled.
    fn start(&mut self, _total: usize) {}
    /// Called before each upscale call, with the source name.
    fn item(&mut self, _name: &str) {}
    /// The batch is complete.
    fn finish(&mut self) {}
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}
