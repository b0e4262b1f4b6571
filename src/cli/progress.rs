//! Indicatif-backed implementation of the scan observer.

use indicatif::{ProgressBar, ProgressStyle};

use crate::scan::observer::ScanObserver;

/// Renders scan progress as a terminal progress bar.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// Clear the bar once the scan is done.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ProgressObserver {
    fn on_progress(&self, current_step: usize, total_steps: usize, message: &str) {
        if self.bar.length() != Some(total_steps as u64) {
            self.bar.set_length(total_steps as u64);
        }
        self.bar.set_position(current_step as u64);
        self.bar.set_message(message.to_string());
    }

    fn on_status(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }
}
