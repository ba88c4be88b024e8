//! Progress display for shuffling and replaying puzzles

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking issued replay moves
///
/// Hidden entirely when progress output is disabled, so callers can report
/// unconditionally.
pub struct ReplayProgress {
    bar: ProgressBar,
}

impl ReplayProgress {
    /// Create a bar for `total` moves labelled with `name`
    pub fn new(name: &str, total: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Report moves issued and frames captured so far
    pub fn update(&self, issued: usize, frames: usize) {
        self.bar.set_position(issued as u64);
        let total = self.bar.length().unwrap_or(0);
        let width = total.to_string().len();
        self.bar
            .set_message(format!("{issued:>width$}/{total} moves, {frames} frames"));
    }

    /// Mark the replay as done
    pub fn finish(&self) {
        self.bar.finish_with_message("✓ solved");
    }

    /// Whether the bar draws anything
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}
