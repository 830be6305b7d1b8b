//! Report generation modules for different output formats
//!
//! This module contains report generators for the two output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::core::SpinOutcome;
use crate::error::WheelError;
use crate::wheel::{Slice, WheelConfiguration};

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Report the winner of a settled spin
    fn spin_report(
        &self,
        outcome: &SpinOutcome,
        configuration: &WheelConfiguration,
    ) -> Result<String, WheelError>;

    /// Report how the options are laid out on the wheel
    fn layout_report(&self, slices: &[Slice]) -> Result<String, WheelError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
