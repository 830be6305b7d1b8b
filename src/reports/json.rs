//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::SpinOutcome;
use crate::error::WheelError;
use crate::wheel::{Slice, WheelConfiguration};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn spin_report(
        &self,
        outcome: &SpinOutcome,
        configuration: &WheelConfiguration,
    ) -> Result<String, WheelError> {
        let report = json!({
            "winner": outcome.winning_label,
            "winning_index": outcome.winning_index,
            "color": configuration.color_for(outcome.winning_index),
            "target_rotation_degrees": outcome.target_rotation_degrees,
            "normalized_angle": outcome.normalized_angle,
            "options": configuration.options(),
        });

        serde_json::to_string_pretty(&report).map_err(WheelError::Json)
    }

    fn layout_report(&self, slices: &[Slice]) -> Result<String, WheelError> {
        let report = json!({
            "slice_count": slices.len(),
            "slices": slices,
        });

        serde_json::to_string_pretty(&report).map_err(WheelError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::wheel::{layout, resolve_outcome};

    #[test]
    fn test_json_spin_report() {
        let config =
            WheelConfiguration::new(["Pizza", "Hambur.", "Sushi"], ["#FF5252", "#52FF9A"])
                .unwrap();
        let outcome = resolve_outcome(&config, 1590);

        let report = JsonReportGenerator::new()
            .spin_report(&outcome, &config)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(
            json,
            json!({
                "winner": "Hamburguesa",
                "winning_index": 1,
                "color": "#52FF9A",
                "target_rotation_degrees": 1590,
                "normalized_angle": 150,
                "options": ["Pizza", "Hambur.", "Sushi"],
            })
        );
    }

    #[test]
    fn test_json_layout_report() {
        let config = WheelConfiguration::new(["a", "b", "c", "d"], ["#000000"]).unwrap();

        let report = JsonReportGenerator::new()
            .layout_report(&layout(&config))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["slice_count"], 4);
        let slices = json["slices"].as_array().unwrap();
        assert_eq!(slices[2]["label"], "c");
        assert_eq!(slices[2]["color"], "#000000");
        assert_eq!(slices[2]["start_degrees"], 180.0);
        assert_eq!(slices[2]["sweep_degrees"], 90.0);
        assert_eq!(slices[2]["label_rotation_degrees"], 315.0);
    }
}
