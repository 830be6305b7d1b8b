//! Spin command executor

use std::sync::Arc;

use console::style;
use miette::{Result, WrapErr, miette};
use tracing::debug;

use crate::config::SpinConfig;
use crate::executors::{CommandExecutor, report_generator};
use crate::progress::SpinAnimator;
use crate::utils::string::pluralize;
use crate::wheel::{FixedRotation, RandomRotation, RotationSource, SpinTiming, WheelSelector};

pub struct SpinExecutor;

impl SpinExecutor {
    fn rotation_source(config: &SpinConfig) -> Box<dyn RotationSource + Send> {
        match (config.rotation, config.seed) {
            (Some(rotation), _) => Box::new(FixedRotation(rotation)),
            (None, Some(seed)) => Box::new(RandomRotation::seeded(seed)),
            (None, None) => Box::new(RandomRotation::from_entropy()),
        }
    }
}

impl CommandExecutor for SpinExecutor {
    type Config = SpinConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut configuration = config
            .wheel
            .resolve()
            .wrap_err("Failed to set up the wheel")?;
        if !config.animate {
            configuration = configuration.with_timing(SpinTiming::instant());
        }

        let count = configuration.options().len();
        eprintln!(
            "{} Spinning a wheel with {} {}...",
            style("🎡").cyan(),
            style(count).yellow().bold(),
            pluralize("option", count)
        );

        let mut selector = WheelSelector::new(configuration)
            .with_boxed_rotation_source(Self::rotation_source(&config));

        // Only draw when someone is watching
        if config.animate && console::Term::stderr().is_term() {
            selector = selector.with_observer(Arc::new(SpinAnimator::new()));
        }

        let handle = selector
            .spin()
            .ok_or_else(|| miette!("The wheel could not start spinning"))?;
        debug!(
            target_rotation = handle.target_rotation_degrees(),
            "waiting for the wheel to settle"
        );

        let outcome = handle
            .wait()
            .wrap_err("Failed to finish the spin")?
            .ok_or_else(|| miette!("The spin was cancelled before it settled"))?;

        let report = report_generator(config.format)
            .spin_report(&outcome, &selector.configuration())
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
