use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use console::{Style, Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::core::{ColorToken, SpinOutcome, SpinState};
use crate::wheel::{Frame, SpinObserver, WheelConfiguration};

// Position is tracked in thousandths of the animation
const BAR_LENGTH: u64 = 1000;
const SPIN_BAR_TEMPLATE: &str = "{spinner} {prefix:.dim} {msg:<24} {bar:40.cyan/blue}";

/// Terminal style for a slice color
pub fn color_style(color: &ColorToken) -> Style {
    match color.ansi256() {
        Some(index) => Style::new().color256(index).bold(),
        None => Style::new().bold(),
    }
}

/// Draws a spin on stderr while it is in flight
///
/// Shows the label passing the pointer in its slice color, next to a bar
/// that follows the eased rotation.
pub struct SpinAnimator {
    labels: Mutex<Vec<String>>,
    bar: Mutex<Option<ProgressBar>>,
    frame_position: AtomicUsize,
}

impl Default for SpinAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinAnimator {
    pub fn new() -> Self {
        Self {
            labels: Mutex::new(Vec::new()),
            bar: Mutex::new(None),
            frame_position: AtomicUsize::new(0),
        }
    }

    fn create_bar(&self, configuration: &WheelConfiguration) -> ProgressBar {
        let pb = ProgressBar::new(BAR_LENGTH);
        let style = ProgressStyle::default_bar()
            .template(SPIN_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_strings(SPINNER_FRAMES)
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_prefix(SpinState::Spinning.action_label());
        pb.set_message(configuration.options()[0].clone());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_spinner_frame(&self) -> &'static str {
        let pos = self.frame_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }
}

impl SpinObserver for SpinAnimator {
    fn on_start(&self, configuration: &WheelConfiguration, _target_rotation_degrees: u32) {
        let _ = Term::stderr().clear_line();
        eprintln!(
            "{} {}",
            style(self.next_spinner_frame()).cyan(),
            style(SpinState::Spinning.action_label()).bold()
        );

        let labels = configuration
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                color_style(configuration.color_for(index))
                    .apply_to(option)
                    .to_string()
            })
            .collect();
        *self.labels.lock().unwrap_or_else(PoisonError::into_inner) = labels;
        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(self.create_bar(configuration));
    }

    fn on_frame(&self, frame: &Frame) {
        let bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(pb) = bar.as_ref() else {
            return;
        };

        let labels = self.labels.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(label) = labels.get(frame.slice_index) {
            pb.set_message(label.clone());
        }
        pb.set_position((frame.progress * BAR_LENGTH as f64).round() as u64);
    }

    fn on_settle(&self, outcome: Option<&SpinOutcome>) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }

        let _ = Term::stderr().clear_line();
        match outcome {
            Some(outcome) => eprintln!(
                "{} Stopped on {}",
                style("✓").green(),
                style(&outcome.winning_label).yellow().bold()
            ),
            None => eprintln!("{} Spin cancelled", style("✗").red()),
        }
    }
}
