//! API Facade for the application.
//!
//! Each workflow has a variant bound to the invoking user's home directory and
//! an `*_at` variant rooted at an explicit home, both wired to the terminal
//! prompter and console reporter.

use std::path::{Path, PathBuf};

use crate::app::{
    AppContext,
    commands::{configure, install, uninstall, verify},
};
use crate::domain::{StatusColors, StatuslinePaths};
use crate::services::{ConsoleReporter, DialoguerPrompter, ProcessCommandRunner, script_generator};

pub use crate::app::commands::configure::{ConfigureOptions, ConfigureOutcome};
pub use crate::app::commands::install::{InstallOptions, InstallOutcome, InstallReport, SelfTest};
pub use crate::app::commands::uninstall::{UninstallOptions, UninstallOutcome, UninstallReport};
pub use crate::app::commands::verify::{CHECK_COUNT, CheckResult, VerifyOptions, VerifyOutcome};
pub use crate::domain::AppError;

type ConsoleContext = AppContext<ProcessCommandRunner, DialoguerPrompter, ConsoleReporter>;

/// Create an `AppContext` rooted at the given home directory.
fn create_context(home: impl Into<PathBuf>) -> ConsoleContext {
    AppContext::new(
        StatuslinePaths::for_home(home),
        ProcessCommandRunner::new(),
        DialoguerPrompter::new(),
        ConsoleReporter::new(),
    )
}

fn home() -> Result<PathBuf, AppError> {
    Ok(StatuslinePaths::resolve()?.home)
}

/// Install the status line for the current user.
pub fn install(options: InstallOptions) -> Result<InstallOutcome, AppError> {
    install_at(home()?, options)
}

/// Install the status line under an explicit home directory.
pub fn install_at(
    home: impl Into<PathBuf>,
    options: InstallOptions,
) -> Result<InstallOutcome, AppError> {
    install::execute(&create_context(home), &options)
}

/// Interactively configure the status line for the current user.
pub fn configure(options: ConfigureOptions) -> Result<ConfigureOutcome, AppError> {
    configure_at(home()?, options)
}

pub fn configure_at(
    home: impl Into<PathBuf>,
    options: ConfigureOptions,
) -> Result<ConfigureOutcome, AppError> {
    configure::execute(&create_context(home), options)
}

/// Run the installation checks for the current user.
pub fn verify(options: VerifyOptions) -> Result<VerifyOutcome, AppError> {
    Ok(verify_at(home()?, options))
}

pub fn verify_at(home: impl Into<PathBuf>, options: VerifyOptions) -> VerifyOutcome {
    verify::execute(&create_context(home), options)
}

/// Remove the status line for the current user.
pub fn uninstall(options: UninstallOptions) -> Result<UninstallOutcome, AppError> {
    uninstall_at(home()?, options)
}

pub fn uninstall_at(
    home: impl Into<PathBuf>,
    options: UninstallOptions,
) -> Result<UninstallOutcome, AppError> {
    uninstall::execute(&create_context(home), options)
}

/// Render the status line script for `colors` into `target`.
pub fn generate_script(target: &Path, colors: &StatusColors) -> Result<(), AppError> {
    script_generator::generate(target, colors)
}
