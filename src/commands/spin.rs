//! Spin command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpinConfig;
use crate::error::WheelError;

impl FromCommand for SpinConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Spin {
                wheel,
                format,
                seed,
                rotation,
                no_animation,
            } => SpinConfig::builder()
                .with_wheel(wheel.into())
                .with_format(format.format)
                .with_seed(seed)
                .with_rotation(rotation)
                .with_animate(!no_animation)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for SpinConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpinConfig);

/// Execute the spin command
pub fn execute_spin_command(command: Commands) -> Result<()> {
    let config = SpinConfig::from_command(command)
        .wrap_err("Failed to parse spin command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spin::SpinExecutor;
    SpinExecutor::execute(config)
}
