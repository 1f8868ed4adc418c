//! claude-status: install and manage a Claude Code status line on macOS.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckResult, ConfigureOptions, ConfigureOutcome, InstallOptions, InstallOutcome,
    InstallReport, SelfTest, UninstallOptions, UninstallOutcome, UninstallReport, VerifyOptions,
    VerifyOutcome, configure, configure_at, generate_script, install, install_at, uninstall,
    uninstall_at, verify, verify_at,
};
pub use domain::{AppError, ColorScheme, StatusColors, StatuslineConfig, StatuslinePaths};
