//! Configuration constants for decision-wheel
//!
//! This module contains all the fixed numbers the wheel works with. Timing
//! values can be overridden through command arguments or wheel files.

use std::time::Duration;

/// Spin geometry and timing
pub mod spin {
    use super::*;

    /// Degrees in one full turn of the wheel
    pub const FULL_TURN_DEGREES: u32 = 360;

    /// Smallest target rotation (four full turns)
    pub const MIN_ROTATION_DEGREES: u32 = 1440;

    /// Exclusive upper bound of the target rotation (eight full turns)
    pub const MAX_ROTATION_DEGREES: u32 = 2880;

    /// Length of one spin animation
    pub const DURATION: Duration = Duration::from_millis(3000);

    /// Time between two animation frames
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
}

/// Labels and menus carried over from the phone app
pub mod labels {
    /// Abbreviated label and the text reported in its place
    pub const ABBREVIATED_HAMBURGER: &str = "Hambur.";
    pub const EXPANDED_HAMBURGER: &str = "Hamburguesa";

    /// Action shown while the wheel can be spun
    pub const IDLE_ACTION: &str = "¡Girar la Rueda!";

    /// Action shown while the wheel is spinning
    pub const SPINNING_ACTION: &str = "Girando...";

    /// Example menu, only used when explicitly asked for
    pub const DEMO_MENU: &[&str] = &[
        "Pizza", "Hambur.", "Sushi", "Tacos", "Pasta", "Pollo", "China", "Parrilla", "Ensalada",
        "Helado",
    ];

    /// Slice colors used when none are configured
    pub const DEFAULT_PALETTE: &[&str] = &[
        "#FF5252", "#FF7752", "#FFB752", "#FFE652", "#B4FF52", "#52FF9A", "#52FFFF", "#5286FF",
        "#A952FF", "#FF52B4",
    ];
}

/// Slice label typography
pub mod typography {
    /// Wheels with more slices than this get the small font
    pub const CROWDED_SLICE_COUNT: usize = 8;

    pub const SMALL_FONT_SIZE: u32 = 11;
    pub const REGULAR_FONT_SIZE: u32 = 13;
}

/// Terminal animation configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar redraws
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames drawn next to the label passing the pointer
    pub const SPINNER_FRAMES: &[&str] = &["🎡◐", "🎡◓", "🎡◑", "🎡◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "DECISION_WHEEL_LOG";
