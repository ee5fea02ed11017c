use crate::constants::{BUILD_COMMAND, INSTALL_COMMAND};
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Runs the dependency-install and build commands in the target directory.
///
/// Commands run synchronously, in sequence. A non-zero exit status fails
/// the provisioning run.
pub fn run_build(target_dir: &Path) -> Result<()> {
    for command in [INSTALL_COMMAND, BUILD_COMMAND] {
        run_command(command, target_dir)?;
    }
    Ok(())
}

fn run_command(command: &[&str], working_dir: &Path) -> Result<()> {
    let display = command.join(" ");
    log::info!("Running '{}' in '{}'", display, working_dir.display());

    let status = Command::new(command[0])
        .args(&command[1..])
        .current_dir(working_dir)
        .status()?;

    if !status.success() {
        return Err(Error::BuildCommandFailed { command: display, status });
    }

    log::info!("'{display}' completed");
    Ok(())
}
