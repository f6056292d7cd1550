use indicatif::{ProgressBar, ProgressStyle};

use crate::core::progress::Progress;

const BAR_TEMPLATE: &str = "[{bar:20.cyan/blue}] {pos}/{len} [{elapsed_precise}<{eta}] {msg}";

/// Terminal progress: status lines on stdout and an indicatif bar per batch.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
    position: u64,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for BarProgress {
    fn message(&mut self, text: &str) {
        match &self.bar {
            Some(bar) if !bar.is_finished() => bar.println(text),
            _ => println!("{text}"),
        }
    }

    fn start(&mut self, total: usize) {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        self.bar = Some(bar);
        self.position = 0;
    }

    fn item(&mut self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(self.position);
            bar.set_message(format!("Upscaling {name}"));
        }
        self.position += 1;
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message("Upscaled");
        }
    }
}
