//! Layout command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LayoutConfig;
use crate::error::WheelError;

impl FromCommand for LayoutConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Layout { wheel, format } => LayoutConfig::builder()
                .with_wheel(wheel.into())
                .with_format(format.format)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for LayoutConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LayoutConfig);

/// Execute the layout command
pub fn execute_layout_command(command: Commands) -> Result<()> {
    let config = LayoutConfig::from_command(command)
        .wrap_err("Failed to parse layout command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::layout::LayoutExecutor;
    LayoutExecutor::execute(config)
}
