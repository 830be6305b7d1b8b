//! Spin command configuration

use super::WheelSourceConfig;
use crate::cli::OutputFormat;
use crate::constants::spin::{MAX_ROTATION_DEGREES, MIN_ROTATION_DEGREES};
use crate::error::WheelError;

/// Configuration for the spin command
#[derive(Debug, Clone)]
pub struct SpinConfig {
    /// Where the wheel comes from
    pub wheel: WheelSourceConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Seed for the random rotation
    pub seed: Option<u64>,
    /// Fixed rotation, takes precedence over the seed
    pub rotation: Option<u32>,
    /// Draw the spin in the terminal and wait for it
    pub animate: bool,
}

impl SpinConfig {
    pub fn builder() -> SpinConfigBuilder {
        SpinConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpinConfigBuilder {
    wheel: Option<WheelSourceConfig>,
    format: Option<OutputFormat>,
    seed: Option<u64>,
    rotation: Option<u32>,
    animate: Option<bool>,
}

impl SpinConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wheel(mut self, wheel: WheelSourceConfig) -> Self {
        self.wheel = Some(wheel);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rotation(mut self, rotation: Option<u32>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }
}

impl crate::common::ConfigBuilder for SpinConfigBuilder {
    type Config = SpinConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        if let Some(rotation) = self.rotation
            && !(MIN_ROTATION_DEGREES..MAX_ROTATION_DEGREES).contains(&rotation)
        {
            return Err(WheelError::ConfigurationError {
                message: format!(
                    "rotation {rotation} is outside [{MIN_ROTATION_DEGREES}, \
                     {MAX_ROTATION_DEGREES}) degrees"
                ),
            });
        }

        Ok(SpinConfig {
            wheel: self
                .wheel
                .ok_or_else(|| WheelError::ConfigurationError {
                    message: "Missing required field: wheel".to_string(),
                })?,
            format: self.format.ok_or_else(|| WheelError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            seed: self.seed,
            rotation: self.rotation,
            animate: self.animate.unwrap_or(true),
        })
    }
}
