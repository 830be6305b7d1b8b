use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, WheelArgs};

#[derive(Parser)]
#[command(
    name = "decision-wheel",
    about = "🎡 Spin a decision wheel and let it pick for you",
    long_about = "decision-wheel lays your options out as equal slices of a wheel, spins it by at \
                  least four full turns and reports the option that stops under the pointer. \
                  Options come from the command line or from a TOML wheel file.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spin the wheel and report the winner
    ///
    /// Animates the wheel in the terminal for the configured duration, then
    /// prints the option that came to rest under the pointer.
    #[command(
        long_about = "Spin the wheel once. The wheel turns by a random rotation between 1440 and \
                      2880 degrees, easing out over three seconds. The slice under the pointer \
                      when it stops is the winner. Use --seed or --rotation for repeatable spins."
    )]
    Spin {
        #[command(flatten)]
        wheel: WheelArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Seed the random rotation for repeatable spins
        #[arg(long, env = "DECISION_WHEEL_SEED")]
        seed: Option<u64>,

        /// Land on this exact rotation, in degrees [1440, 2880)
        #[arg(long, value_name = "DEGREES", env = "DECISION_WHEEL_ROTATION")]
        rotation: Option<u32>,

        /// Settle immediately without drawing the animation
        #[arg(long, env = "DECISION_WHEEL_NO_ANIMATION")]
        no_animation: bool,
    },

    /// Show how the options are laid out on the wheel
    ///
    /// Lists every slice with its color, start angle, sweep and label
    /// rotation.
    Layout {
        #[command(flatten)]
        wheel: WheelArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
