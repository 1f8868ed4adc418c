//! Homebrew bootstrap and package installation.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, Tool};
use crate::ports::{CommandRequest, CommandRunnerPort};

/// Official Homebrew bootstrap, run through `bash -c`.
const HOMEBREW_INSTALL_SCRIPT: &str = r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#;

/// Where the Homebrew installer places `brew` (Apple Silicon, then Intel).
pub const BREW_LOCATIONS: [&str; 2] = ["/opt/homebrew/bin/brew", "/usr/local/bin/brew"];

/// Install Homebrew and make `brew` resolvable for the rest of this process.
pub fn install_homebrew(runner: &impl CommandRunnerPort) -> Result<(), AppError> {
    runner.run_attached("bash", &["-c", HOMEBREW_INSTALL_SCRIPT]).map_err(|err| {
        AppError::DependencyInstall {
            package: Tool::Homebrew.display_name().to_string(),
            details: err.to_string(),
        }
    })?;

    for location in BREW_LOCATIONS {
        let probe = runner.run(&CommandRequest::new(location, &["--version"]));
        match probe {
            Ok(output) if output.success() => {
                if let Some(dir) = Path::new(location).parent() {
                    runner.extend_search_path(dir);
                }
                info!(location, "homebrew available");
                return Ok(());
            }
            _ => debug!(location, "brew not found at candidate location"),
        }
    }
    Ok(())
}

/// `brew install <package>` with the terminal attached.
pub fn install_with_brew(runner: &impl CommandRunnerPort, package: &str) -> Result<(), AppError> {
    runner.run_attached(Tool::Homebrew.program(), &["install", package]).map_err(|err| {
        AppError::DependencyInstall { package: package.to_string(), details: err.to_string() }
    })
}
