//! # Decision Wheel - Let a Spinning Wheel Decide
//!
//! Decision Wheel lays a list of options out as equal slices of a wheel,
//! spins it by a random amount and reports the option that stops under a
//! fixed pointer. It is the wheel behind "what do we eat tonight?".
//!
//! ## Main Components
//!
//! - **Wheel**: configuration, the angle-to-winner mapping, slice geometry,
//!   the ease-out animation and the [`WheelSelector`](wheel::WheelSelector)
//!   state machine
//! - **Reports**: human-readable and JSON output for spins and layouts
//! - **CLI**: the `decision-wheel` command with `spin` and `layout`
//!
//! ## Usage
//!
//! ### Spinning a Wheel
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use decision_wheel::wheel::{RandomRotation, SpinTiming, WheelConfiguration, WheelSelector};
//!
//! # fn main() -> miette::Result<()> {
//! let configuration = WheelConfiguration::new(
//!     ["Pizza", "Hambur.", "Sushi", "Tacos"],
//!     ["#FF5252", "#52FF9A"],
//! )?
//! .with_timing(SpinTiming::instant());
//!
//! let reported = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&reported);
//! let selector = WheelSelector::new(configuration)
//!     .with_rotation_source(RandomRotation::seeded(2024))
//!     .on_finish(move |label| {
//!         println!("Tonight we eat {label}");
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//!
//! if let Some(handle) = selector.spin() {
//!     if let Some(outcome) = handle.wait()? {
//!         assert!(outcome.winning_index < 4);
//!         assert!((1440..2880).contains(&outcome.target_rotation_degrees));
//!     }
//! }
//! assert_eq!(reported.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a Report
//!
//! ```
//! use decision_wheel::reports::{JsonReportGenerator, ReportGenerator};
//! use decision_wheel::wheel::{WheelConfiguration, resolve_outcome};
//!
//! # fn main() -> miette::Result<()> {
//! let configuration = WheelConfiguration::demo();
//! let outcome = resolve_outcome(&configuration, 1440);
//!
//! let json = JsonReportGenerator::new().spin_report(&outcome, &configuration)?;
//! assert!(json.contains("\"winner\": \"Pizza\""));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod reports;
pub mod wheel;
pub mod wheel_file;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    logging::init();

    let cli = Cli::parse();
    execute_command(cli.command)
}
