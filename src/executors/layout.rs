//! Layout command executor

use miette::{Result, WrapErr};

use crate::config::LayoutConfig;
use crate::executors::{CommandExecutor, report_generator};
use crate::wheel::layout;

pub struct LayoutExecutor;

impl CommandExecutor for LayoutExecutor {
    type Config = LayoutConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let configuration = config
            .wheel
            .resolve()
            .wrap_err("Failed to set up the wheel")?;

        let report = report_generator(config.format)
            .layout_report(&layout(&configuration))
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
