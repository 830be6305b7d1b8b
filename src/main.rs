use miette::Result;

/// Main entry point for the decision-wheel CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    decision_wheel::run()
}
