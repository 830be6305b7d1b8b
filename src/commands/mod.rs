//! Command implementations for decision-wheel CLI
//!
//! - spin: Spin the wheel and report the winner
//! - layout: Show how the options are laid out on the wheel

pub mod layout;
pub mod spin;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Spin { .. } => spin::execute_spin_command(command),
        Commands::Layout { .. } => layout::execute_layout_command(command),
    }
}
