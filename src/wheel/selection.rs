use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::WheelConfiguration;
use crate::constants::labels::{ABBREVIATED_HAMBURGER, EXPANDED_HAMBURGER};
use crate::constants::spin::{FULL_TURN_DEGREES, MAX_ROTATION_DEGREES, MIN_ROTATION_DEGREES};
use crate::core::SpinOutcome;

/// Supplies the total rotation of each spin
pub trait RotationSource {
    /// Next target rotation in whole degrees
    fn next_rotation(&mut self) -> u32;
}

impl<F> RotationSource for F
where
    F: FnMut() -> u32,
{
    fn next_rotation(&mut self) -> u32 {
        self()
    }
}

/// Uniform draw from `[1440, 2880)` degrees
#[derive(Debug)]
pub struct RandomRotation<R> {
    rng: R,
}

impl<R: Rng> RandomRotation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRotation<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RotationSource for RandomRotation<R> {
    fn next_rotation(&mut self) -> u32 {
        self.rng.gen_range(MIN_ROTATION_DEGREES..MAX_ROTATION_DEGREES)
    }
}

/// Always lands on the same rotation
///
/// Meant for tests and replays. The value is not range-checked here, so
/// callers keep it inside `[1440, 2880)` themselves; spinning with anything
/// else trips a debug assertion.
#[derive(Debug, Clone, Copy)]
pub struct FixedRotation(pub u32);

impl RotationSource for FixedRotation {
    fn next_rotation(&mut self) -> u32 {
        self.0
    }
}

/// Rotation left over after dropping complete turns
pub fn normalize_angle(rotation_degrees: u32) -> u32 {
    rotation_degrees % FULL_TURN_DEGREES
}

/// Index of the slice under the pointer once the wheel rests at
/// `normalized_angle`
///
/// Slices run clockwise from 0 degrees and the pointer sits at 0 degrees, so
/// the slice it points at is found from the complement of the rotation.
/// Evaluates `floor((360 - angle) / (360 / n)) mod n` in integers.
pub fn winning_index(normalized_angle: u32, option_count: NonZeroUsize) -> usize {
    let turn = u64::from(FULL_TURN_DEGREES);
    let complement = turn - u64::from(normalized_angle % FULL_TURN_DEGREES);
    let count = option_count.get() as u64;

    ((complement * count / turn) % count) as usize
}

/// Text reported for a raw option label
pub fn display_label(raw: &str) -> &str {
    if raw == ABBREVIATED_HAMBURGER {
        EXPANDED_HAMBURGER
    } else {
        raw
    }
}

/// Resolve the winner of a spin that came to rest at `target_rotation_degrees`
pub fn resolve_outcome(
    configuration: &WheelConfiguration,
    target_rotation_degrees: u32,
) -> SpinOutcome {
    let normalized_angle = normalize_angle(target_rotation_degrees);
    let winning_index = winning_index(normalized_angle, configuration.option_count());
    let winning_label = display_label(&configuration.options()[winning_index]).to_string();

    SpinOutcome {
        target_rotation_degrees,
        normalized_angle,
        winning_index,
        winning_label,
    }
}
