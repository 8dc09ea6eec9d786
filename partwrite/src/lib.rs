pub mod cli;
pub mod errors;
pub mod logging;
pub mod ui;
pub mod write;

use crate::errors::WriteError;
use partwrite_hal::LinuxHal;

/// Dispatch a parsed CLI invocation.
pub fn run(cli: &cli::Cli) -> Result<(), WriteError> {
    match &cli.command {
        cli::Command::Write {
            device,
            filesystem,
            start,
            stop,
            force,
        } => {
            let request = write::WriteRequest {
                device: device.clone(),
                filesystem: filesystem.clone(),
                start: start.clone(),
                stop: stop.clone(),
                force: *force,
            };
            let hal = LinuxHal::new();
            let stdout = write::run(&hal, &request, ui::confirm_destructive_action)?;
            if !stdout.trim().is_empty() {
                log::debug!("parted output: {}", stdout.trim());
            }
            Ok(())
        }
    }
}
