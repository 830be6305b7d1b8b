//! # Configuration Module
//!
//! Configuration structures for the decision-wheel commands. Each command
//! has a config with a builder; all of them share [`WheelSourceConfig`] to
//! decide where the wheel's options come from.
//!
//! ## Example
//!
//! ```
//! use decision_wheel::ConfigBuilder;
//! use decision_wheel::cli::OutputFormat;
//! use decision_wheel::config::{SpinConfig, WheelSourceConfig};
//!
//! # fn main() -> miette::Result<()> {
//! let config = SpinConfig::builder()
//!     .with_wheel(WheelSourceConfig {
//!         options: vec!["Pizza".into(), "Sushi".into()],
//!         ..Default::default()
//!     })
//!     .with_format(OutputFormat::Human)
//!     .with_seed(Some(42))
//!     .build()?;
//!
//! let wheel = config.wheel.resolve()?;
//! assert_eq!(wheel.options().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod layout;
pub mod spin;

pub use common::WheelSourceConfig;
pub use layout::LayoutConfig;
pub use spin::SpinConfig;
