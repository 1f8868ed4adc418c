//! Uninstall workflow.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::settings::remove_status_line;
use crate::ports::{CommandRunnerPort, PrompterPort, ReporterPort};
use crate::services::settings_store::{self, ReadOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct UninstallOptions {
    /// Leave settings backups in place without asking.
    pub keep_backup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    Cancelled,
    Completed(UninstallReport),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    /// Script, config, settings entry and deleted backups.
    pub removed: usize,
    /// Backups still on disk after the run, newest first.
    pub preserved_backups: Vec<PathBuf>,
    pub restored_from: Option<PathBuf>,
}

pub fn execute<C, P, R>(
    ctx: &AppContext<C, P, R>,
    options: UninstallOptions,
) -> Result<UninstallOutcome, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let paths = ctx.paths();
    let prompter = ctx.prompter();
    let reporter = ctx.reporter();

    let confirmed = prompter.confirm(
        "Are you sure you want to uninstall the Claude Code status line?",
        false,
    )?;
    if confirmed != Some(true) {
        reporter.info("Uninstallation cancelled");
        return Ok(UninstallOutcome::Cancelled);
    }

    let mut report = UninstallReport::default();

    reporter.step("Removing status line script...");
    if settings_store::remove_if_exists(&paths.script)? {
        reporter.success("Status line script removed");
        report.removed += 1;
    }

    reporter.step("Removing configuration...");
    if settings_store::remove_if_exists(&paths.config)? {
        reporter.success("Configuration removed");
        report.removed += 1;
    }

    reporter.step("Updating Claude Code settings...");
    match settings_store::read_json(&paths.settings) {
        ReadOutcome::Found(mut document) => {
            if remove_status_line(&mut document) {
                settings_store::write_json(&paths.settings, &document)?;
                reporter.success("Status line removed from settings");
                report.removed += 1;
            }
        }
        ReadOutcome::Absent => {}
        ReadOutcome::Corrupt(reason) => {
            warn!(%reason, "leaving unreadable settings untouched");
            reporter.warn("Settings file could not be parsed; left unchanged");
        }
    }

    let backups = settings_store::list_backups(&paths.settings)?;
    if !options.keep_backup {
        let remove = prompter.confirm("Remove backup files as well?", false)? == Some(true);
        if remove {
            report.removed += remove_backups(ctx, &backups)?;
        } else if !backups.is_empty() {
            reporter.info(&format!("{} backup files preserved:", backups.len()));
            for backup in &backups {
                reporter.detail(&paths.display(backup));
            }
        }
    }

    report.preserved_backups = settings_store::list_backups(&paths.settings)?;
    report.restored_from = offer_restore(ctx, &report.preserved_backups)?;

    info!(removed = report.removed, "uninstall finished");
    Ok(UninstallOutcome::Completed(report))
}

fn remove_backups<C, P, R>(ctx: &AppContext<C, P, R>, backups: &[PathBuf]) -> Result<usize, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let reporter = ctx.reporter();
    reporter.step("Finding backup files...");
    if backups.is_empty() {
        reporter.info("No backup files found");
        return Ok(0);
    }

    reporter.step(&format!("Removing {} backup files...", backups.len()));
    let mut removed = 0;
    for backup in backups {
        if settings_store::remove_if_exists(backup)? {
            removed += 1;
        }
    }
    reporter.success(&format!("{} backup files removed", removed));
    Ok(removed)
}

fn offer_restore<C, P, R>(
    ctx: &AppContext<C, P, R>,
    backups: &[PathBuf],
) -> Result<Option<PathBuf>, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    if backups.is_empty() {
        return Ok(None);
    }

    let prompter = ctx.prompter();
    if prompter.confirm("Restore from a backup file?", false)? != Some(true) {
        return Ok(None);
    }

    let paths = ctx.paths();
    let choices: Vec<String> = backups.iter().map(|backup| paths.display(backup)).collect();
    let Some(index) = prompter.select("Choose backup to restore:", &choices, 0)? else {
        return Ok(None);
    };
    let Some(backup) = backups.get(index) else {
        return Ok(None);
    };

    settings_store::restore_backup(backup, &paths.settings)?;
    ctx.reporter().success("Settings restored from backup");
    Ok(Some(backup.clone()))
}
