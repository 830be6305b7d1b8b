//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::constants::spin::FULL_TURN_DEGREES;
use crate::core::SpinOutcome;
use crate::error::WheelError;
use crate::progress::color_style;
use crate::utils::string::pluralize;
use crate::wheel::{Slice, WheelConfiguration, label_font_size};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn spin_report(
        &self,
        outcome: &SpinOutcome,
        configuration: &WheelConfiguration,
    ) -> Result<String, WheelError> {
        let mut output = String::new();
        let turns = outcome.target_rotation_degrees / FULL_TURN_DEGREES;
        let color = configuration.color_for(outcome.winning_index);

        writeln!(
            output,
            "\n{} The wheel picked {}",
            style("🎡").cyan(),
            color_style(color).apply_to(&outcome.winning_label)
        )?;
        writeln!(
            output,
            "  {} Slice {} of {}",
            style("→").dim(),
            style(outcome.winning_index + 1).yellow(),
            style(configuration.options().len()).yellow()
        )?;
        writeln!(
            output,
            "  {} Rotated {}° ({} full {} + {}°)",
            style("→").dim(),
            outcome.target_rotation_degrees,
            turns,
            pluralize("turn", turns as usize),
            outcome.normalized_angle
        )?;

        Ok(output)
    }

    fn layout_report(&self, slices: &[Slice]) -> Result<String, WheelError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} {} {}, labels at {}pt:\n",
            style("🎡").cyan(),
            style(slices.len()).yellow().bold(),
            pluralize("slice", slices.len()),
            label_font_size(slices.len())
        )?;

        for slice in slices {
            writeln!(
                output,
                "  {:>3}  {:<20} {:<9} {:>7.2}° → {:>7.2}°  label {:>7.2}°",
                slice.index,
                color_style(&slice.color).apply_to(&slice.label),
                style(&slice.color).dim(),
                slice.start_degrees,
                slice.end_degrees(),
                slice.label_rotation_degrees
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{layout, resolve_outcome};

    #[test]
    fn test_spin_report_names_winner() {
        let config = WheelConfiguration::new(["Pizza", "Hambur.", "Sushi"], ["#FF5252"]).unwrap();
        let outcome = resolve_outcome(&config, 1440 + 150);

        let report = HumanReportGenerator::new()
            .spin_report(&outcome, &config)
            .unwrap();
        let plain = console::strip_ansi_codes(&report);

        assert!(plain.contains("The wheel picked Hamburguesa"));
        assert!(plain.contains("Slice 2 of 3"));
        assert!(plain.contains("Rotated 1590° (4 full turns + 150°)"));
    }

    #[test]
    fn test_layout_report_lists_slices() {
        let config = WheelConfiguration::new(["Pizza", "Sushi"], Vec::<String>::new()).unwrap();

        let report = HumanReportGenerator::new()
            .layout_report(&layout(&config))
            .unwrap();
        let plain = console::strip_ansi_codes(&report);

        assert!(plain.contains("2 slices, labels at 13pt"));
        assert!(plain.contains("Pizza"));
        assert!(plain.contains("180.00°"));
        assert!(plain.contains("#FF7752    180.00°"));
    }
}
