// Wed Feb 11 2026 - Alex

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::frontier::Direction;

/// Two-line live display, one spinner per frontier, mirroring the search's
/// symmetric shape.
pub struct RaceDisplay {
    multi: MultiProgress,
    forward: ProgressBar,
    backward: ProgressBar,
}

impl RaceDisplay {
    pub fn new(enabled: bool) -> Self {
        let multi = MultiProgress::new();
        if !enabled {
            multi.set_draw_target(ProgressDrawTarget::hidden());
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

        let forward = multi.add(ProgressBar::new_spinner());
        forward.set_style(style.clone());
        forward.enable_steady_tick(Duration::from_millis(100));
        forward.set_message("forward: waiting for seed");

        let backward = multi.add(ProgressBar::new_spinner());
        backward.set_style(style);
        backward.enable_steady_tick(Duration::from_millis(100));
        backward.set_message("backward: waiting for seed");

        Self {
            multi,
            forward,
            backward,
        }
    }

    pub fn update(&self, direction: Direction, seen: usize, queued: usize, current_title: &str) {
        self.bar(direction).set_message(format!(
            "{}: {} links seen, {} queued | expanding {}",
            direction, seen, queued, current_title
        ));
    }

    pub fn finish(&self) {
        self.forward.finish_and_clear();
        self.backward.finish_and_clear();
        let _ = self.multi.clear();
    }

    fn bar(&self, direction: Direction) -> &ProgressBar {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }
}
