//! # Wheel Module
//!
//! A wheel is an ordered list of options drawn as equal slices, laid out
//! clockwise from 0 degrees. Spinning it rotates the wheel by a random
//! amount, at least four full turns, under a pointer fixed at 0 degrees. The
//! slice that stops under the pointer wins.
//!
//! ## Key Components
//!
//! - **WheelConfiguration**: validated options, colors and timing
//! - **Selection**: rotation sources and the angle-to-index mapping
//! - **Geometry**: slice layout for whoever draws the wheel
//! - **Animation**: the ease-out curve and the frame loop
//! - **WheelSelector**: the `Idle -> Spinning -> Idle` state machine that
//!   runs spins and reports each winner exactly once
//!
//! ## Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use decision_wheel::wheel::{WheelConfiguration, layout, resolve_outcome, winning_index};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ten = NonZeroUsize::new(10).ok_or("zero")?;
//! assert_eq!(winning_index(0, ten), 0);
//! assert_eq!(winning_index(36, ten), 9);
//!
//! let config = WheelConfiguration::demo();
//! let outcome = resolve_outcome(&config, 1440 + 324);
//! assert_eq!(outcome.winning_label, "Hamburguesa");
//! assert_eq!(layout(&config)[1].start_degrees, 36.0);
//! # Ok(())
//! # }
//! ```

mod animation;
mod configuration;
mod geometry;
mod selection;
mod selector;

pub use animation::{Animation, AnimationEnd, Frame, ease_out_cubic, rotation_at};
pub use configuration::{SpinTiming, WheelConfiguration};
pub use geometry::{Slice, label_font_size, layout, slice_under_pointer};
pub use selection::{
    FixedRotation, RandomRotation, RotationSource, display_label, normalize_angle,
    resolve_outcome, winning_index,
};
pub use selector::{SpinHandle, SpinObserver, WheelSelector};
