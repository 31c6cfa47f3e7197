//! Spinner-style progress indicator.
//!
//! Implements the `ProgressSink` port with an `indicatif` spinner on stderr.
//! Purely cosmetic: the pipeline never reads state back from it, and it is
//! disabled entirely when quiet or when stderr is not a terminal (piped
//! output stays clean for tests and scripts).

use std::io::IsTerminal as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use stamp_core::application::ports::ProgressSink;

use crate::cli::GlobalArgs;

pub struct SpinnerProgress {
    bar: Option<ProgressBar>,
}

impl SpinnerProgress {
    pub fn new(args: &GlobalArgs) -> Self {
        let enabled = !args.quiet && std::io::stderr().is_terminal();
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .expect("static template is valid"),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { bar }
    }
}

impl ProgressSink for SpinnerProgress {
    fn show(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_owned());
        }
    }

    fn success(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("\u{2713} {message}"));
        }
    }

    fn failure(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("\u{2717} {message}"));
        }
    }
}
