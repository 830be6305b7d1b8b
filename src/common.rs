//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Arguments describing which wheel to use
#[derive(Args, Debug, Clone)]
pub struct WheelArgs {
    /// Options on the wheel, in clockwise order
    #[arg(value_name = "OPTION")]
    pub options: Vec<String>,

    /// Slice colors, reused when there are fewer colors than options
    #[arg(
        long,
        value_name = "COLOR",
        value_delimiter = ',',
        env = "DECISION_WHEEL_COLORS"
    )]
    pub colors: Vec<String>,

    /// TOML wheel file with options, colors and timing
    #[arg(long, value_name = "FILE", env = "DECISION_WHEEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the example food menu
    #[arg(long, env = "DECISION_WHEEL_DEMO")]
    pub demo: bool,

    /// Length of the spin animation in milliseconds
    #[arg(long, value_name = "MS", env = "DECISION_WHEEL_DURATION_MS")]
    pub duration_ms: Option<u64>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DECISION_WHEEL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::WheelError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::WheelError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::WheelError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
