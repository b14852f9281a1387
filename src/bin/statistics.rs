//! Descriptive statistics calculator: `mean` and `median` over 8-10 operands.

use opcalc::io::OutputManager;
use opcalc::{Settings, Tool, cli, logging};

fn main() -> std::process::ExitCode {
    match Settings::load() {
        Ok(settings) => logging::init_with_config(&settings.logging),
        Err(e) => {
            logging::init();
            tracing::warn!("invalid configuration, using defaults: {e}");
        }
    }

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    cli::run(&Tool::STATISTICS, &args, &mut OutputManager::stdio()).into()
}
