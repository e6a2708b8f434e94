//! Card batch progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cards: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many cards of a batch have been written
///
/// Log lines emitted while the bar is visible should go through
/// [`ProgressManager::suspend`] so they do not tear the bar.
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl ProgressManager {
    /// Bar sized for `card_count` cards
    pub fn new(card_count: usize) -> Self {
        let bar = ProgressBar::new(card_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, completed: 0 }
    }

    /// Hidden bar that still counts completions
    pub fn hidden(card_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(card_count as u64);
        Self { bar, completed: 0 }
    }

    /// Show which card is being drawn
    pub fn start_card(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    /// Count one finished card
    pub fn complete_card(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Cards finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Run `f` with the bar temporarily cleared from the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
