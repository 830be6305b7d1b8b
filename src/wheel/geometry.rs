use serde::Serialize;

use super::WheelConfiguration;
use crate::constants::spin::FULL_TURN_DEGREES;
use crate::constants::typography::{CROWDED_SLICE_COUNT, REGULAR_FONT_SIZE, SMALL_FONT_SIZE};
use crate::core::ColorToken;

const TURN: f64 = FULL_TURN_DEGREES as f64;

/// One equal angular segment of the wheel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub label: String,
    pub color: ColorToken,
    /// Clockwise angle where the slice begins, in degrees
    pub start_degrees: f64,
    pub sweep_degrees: f64,
    /// Rotation applied to the label so it reads along the slice
    pub label_rotation_degrees: f64,
}

impl Slice {
    pub fn end_degrees(&self) -> f64 {
        self.start_degrees + self.sweep_degrees
    }
}

/// Lay the options out clockwise from 0 degrees, in list order
pub fn layout(configuration: &WheelConfiguration) -> Vec<Slice> {
    let count = configuration.option_count().get();
    let sweep = TURN / count as f64;

    configuration
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let start = index as f64 * TURN / count as f64;
            Slice {
                index,
                label: label.clone(),
                color: configuration.color_for(index).clone(),
                start_degrees: start,
                sweep_degrees: sweep,
                label_rotation_degrees: 90.0 + start + sweep / 2.0,
            }
        })
        .collect()
}

/// Font size for slice labels, smaller on crowded wheels
pub fn label_font_size(slice_count: usize) -> u32 {
    if slice_count > CROWDED_SLICE_COUNT {
        SMALL_FONT_SIZE
    } else {
        REGULAR_FONT_SIZE
    }
}

/// Slice passing the pointer while the wheel is at `rotation_degrees`
///
/// Agrees with [`winning_index`](super::winning_index) for whole degrees, and
/// also works mid-animation when the rotation is fractional.
pub fn slice_under_pointer(rotation_degrees: f64, slice_count: usize) -> usize {
    if slice_count == 0 {
        return 0;
    }

    let normalized = rotation_degrees.rem_euclid(TURN);
    let position = ((TURN - normalized) * slice_count as f64 / TURN).floor() as usize;
    position % slice_count
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::wheel::winning_index;

    #[test]
    fn test_layout_four_slices() {
        let config = WheelConfiguration::new(["a", "b", "c", "d"], ["#FF0000", "#00FF00"]).unwrap();
        let slices = layout(&config);

        assert_eq!(slices.len(), 4);
        let starts: Vec<f64> = slices.iter().map(|s| s.start_degrees).collect();
        assert_eq!(starts, [0.0, 90.0, 180.0, 270.0]);
        assert!(slices.iter().all(|s| s.sweep_degrees == 90.0));
        assert_eq!(slices[0].label_rotation_degrees, 135.0);
        assert_eq!(slices[3].label_rotation_degrees, 405.0);
        assert_eq!(slices[2].color.as_str(), "#FF0000");
        assert_eq!(slices[3].end_degrees(), 360.0);
    }

    #[test]
    fn test_label_font_size() {
        assert_eq!(label_font_size(8), 13);
        assert_eq!(label_font_size(9), 11);
        assert_eq!(label_font_size(1), 13);
    }

    #[test]
    fn test_slice_under_pointer_matches_winning_index() {
        for n in 1..=12 {
            let count = NonZeroUsize::new(n).unwrap();
            for rotation in 1440..1800u32 {
                assert_eq!(
                    slice_under_pointer(f64::from(rotation), n),
                    winning_index(rotation % 360, count),
                    "n={n} rotation={rotation}"
                );
            }
        }
    }

    #[test]
    fn test_slice_under_pointer_fractional() {
        assert_eq!(slice_under_pointer(0.5, 10), 9);
        assert_eq!(slice_under_pointer(-10.0, 10), 0);
        assert_eq!(slice_under_pointer(12.0, 0), 0);
    }
}
