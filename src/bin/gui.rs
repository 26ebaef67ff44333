use log::error;
use mandelbrot_zoom::{RunGuiCommand, ViewerConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match RunGuiCommand::new(ViewerConfig::default()).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
