use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner counting visited objects.
///
/// Draws to stderr; hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    spinner: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::new_with_visibility(quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let spinner = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };
        Self { spinner }
    }

    fn create_visible_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} Scanning {pos} objects {wide_msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(TICK_INTERVAL);
        spinner
    }

    /// Count one visited object and show its path.
    pub fn inc(&self, path: &str) {
        self.spinner.inc(1);
        self.spinner.set_message(path.to_string());
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
