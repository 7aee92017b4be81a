//! Busy spinner shown while a reply is awaited

use indicatif::{ProgressBar, ProgressStyle};
use pharma_application::TurnProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner bracketing the AwaitingReply window of a turn
pub struct SpinnerReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgress for SpinnerReporter {
    fn on_waiting_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message("Looking that up...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_waiting_end(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}
