//! Wheel source configuration shared by all commands

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::common::WheelArgs;
use crate::error::WheelError;
use crate::wheel::{SpinTiming, WheelConfiguration};
use crate::wheel_file::WheelFile;

/// Where a command takes its wheel from
///
/// Options given on the command line win over the wheel file's options, and
/// the same goes for colors and duration. The demo menu is only used when
/// asked for.
#[derive(Debug, Clone, Default)]
pub struct WheelSourceConfig {
    pub options: Vec<String>,
    pub colors: Vec<String>,
    pub wheel_file: Option<PathBuf>,
    pub demo: bool,
    pub duration: Option<Duration>,
}

impl From<WheelArgs> for WheelSourceConfig {
    fn from(args: WheelArgs) -> Self {
        Self {
            options: args.options,
            colors: args.colors,
            wheel_file: args.config,
            demo: args.demo,
            duration: args.duration_ms.map(Duration::from_millis),
        }
    }
}

impl WheelSourceConfig {
    /// Load the wheel file if any and build the wheel configuration
    ///
    /// # Errors
    ///
    /// Wheel file errors, [`WheelError::EmptyOptions`] when no source yields
    /// an option, and [`WheelError::ConfigurationError`] when `--demo` is
    /// combined with explicit options.
    pub fn resolve(&self) -> Result<WheelConfiguration, WheelError> {
        if self.demo && (!self.options.is_empty() || self.wheel_file.is_some()) {
            return Err(WheelError::ConfigurationError {
                message: "--demo cannot be combined with options or a wheel file".to_string(),
            });
        }

        let file = match &self.wheel_file {
            Some(path) => {
                debug!(path = %path.display(), "loading wheel file");
                WheelFile::parse_file(path)?
            }
            None => WheelFile::default(),
        };

        let configuration = if self.demo {
            WheelConfiguration::demo()
        } else {
            let options = if self.options.is_empty() {
                file.options.clone()
            } else {
                self.options.clone()
            };
            let colors = if self.colors.is_empty() {
                file.colors.clone()
            } else {
                self.colors.clone()
            };
            WheelConfiguration::new(options, colors)?
        };

        let file_timing = file.timing();
        let timing = match self.duration {
            Some(duration) => SpinTiming::new(duration, file_timing.frame_interval()),
            None => file_timing,
        };

        Ok(configuration.with_timing(timing))
    }
}
