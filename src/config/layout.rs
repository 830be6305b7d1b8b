//! Layout command configuration

use super::WheelSourceConfig;
use crate::cli::OutputFormat;
use crate::error::WheelError;

/// Configuration for the layout command
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub wheel: WheelSourceConfig,
    pub format: OutputFormat,
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct LayoutConfigBuilder {
    wheel: Option<WheelSourceConfig>,
    format: Option<OutputFormat>,
}

impl LayoutConfigBuilder {
    pub fn with_wheel(mut self, wheel: WheelSourceConfig) -> Self {
        self.wheel = Some(wheel);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for LayoutConfigBuilder {
    type Config = LayoutConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(LayoutConfig {
            wheel: self.wheel.ok_or_else(|| WheelError::ConfigurationError {
                message: "Missing required field: wheel".to_string(),
            })?,
            format: self.format.ok_or_else(|| WheelError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
        })
    }
}
