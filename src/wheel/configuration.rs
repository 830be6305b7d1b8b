use std::num::NonZeroUsize;
use std::time::Duration;

use crate::constants::labels::{DEFAULT_PALETTE, DEMO_MENU};
use crate::constants::spin::{DURATION, FRAME_INTERVAL};
use crate::core::ColorToken;
use crate::error::WheelError;

/// Shortest frame interval accepted, keeps the animation loop from spinning hot
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// How long a spin animates and how often it emits frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    duration: Duration,
    frame_interval: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            duration: DURATION,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

impl SpinTiming {
    pub fn new(duration: Duration, frame_interval: Duration) -> Self {
        Self {
            duration,
            frame_interval: frame_interval.max(MIN_FRAME_INTERVAL),
        }
    }

    /// Timing that settles on the first frame
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, FRAME_INTERVAL)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

/// Options and colors a wheel is drawn with
///
/// A configuration always holds at least one option and at least one color.
/// It is immutable; a [`WheelSelector`](super::WheelSelector) swaps whole
/// configurations and refuses to do so mid-spin.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfiguration {
    options: Vec<String>,
    colors: Vec<ColorToken>,
    timing: SpinTiming,
}

impl WheelConfiguration {
    /// Validate options and colors
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::EmptyOptions`] when `options` is empty. An empty
    /// `colors` list falls back to the default palette.
    pub fn new<S, C>(
        options: impl IntoIterator<Item = S>,
        colors: impl IntoIterator<Item = C>,
    ) -> Result<Self, WheelError>
    where
        S: Into<String>,
        C: Into<ColorToken>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(WheelError::EmptyOptions);
        }

        let mut colors: Vec<ColorToken> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            colors = DEFAULT_PALETTE.iter().copied().map(ColorToken::from).collect();
        }

        Ok(Self {
            options,
            colors,
            timing: SpinTiming::default(),
        })
    }

    /// The example food menu with the default palette
    pub fn demo() -> Self {
        Self {
            options: DEMO_MENU.iter().map(|option| option.to_string()).collect(),
            colors: DEFAULT_PALETTE.iter().copied().map(ColorToken::from).collect(),
            timing: SpinTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn timing(&self) -> SpinTiming {
        self.timing
    }

    pub fn option_count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.options.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Color of the slice at `index`, reusing colors cyclically
    pub fn color_for(&self, index: usize) -> &ColorToken {
        &self.colors[index % self.colors.len()]
    }
}
