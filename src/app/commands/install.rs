//! Install workflow: dependencies, backup, script, settings, self-test.

use std::path::PathBuf;

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::config;
use crate::domain::settings::merge_status_line;
use crate::domain::{AppError, StatusLineCommand, StatuslineConfig, SystemInfo, Tool};
use crate::ports::{CommandRunnerPort, PrompterPort, ReporterPort};
use crate::services::dependency_installer;
use crate::services::environment_probe::probe_platform;
use crate::services::script_generator::{self, SEGMENT_GLYPHS};
use crate::services::settings_store::{self, ReadOutcome};

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Reinstall without asking when a script already exists.
    pub force: bool,
    /// Configuration document to take colors from instead of the stored one.
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Cancelled,
    Installed(InstallReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Packages installed during this run, in installation order.
    pub installed: Vec<String>,
    /// Snapshot of the settings taken before they were modified.
    pub backup: Option<PathBuf>,
    pub config_created: bool,
    /// Whether the cost tool is available after installation.
    pub cost_tracking: bool,
    pub self_test: SelfTest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTest {
    Passed,
    Failed(String),
}

pub fn execute<C, P, R>(
    ctx: &AppContext<C, P, R>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let reporter = ctx.reporter();
    let paths = ctx.paths();

    reporter.step("Checking system requirements...");
    let system = probe_platform(ctx.platform(), ctx.commands());
    if !system.is_macos {
        return Err(AppError::UnsupportedPlatform { platform: system.platform });
    }
    reporter.success("Running on macOS");

    if paths.script.exists() && !options.force {
        let proceed =
            ctx.prompter().confirm("Status line already installed. Continue anyway?", false)?;
        if proceed != Some(true) {
            reporter.info("Installation cancelled");
            return Ok(InstallOutcome::Cancelled);
        }
    }

    let config = load_config(ctx, options)?;

    reporter.step("Installing dependencies...");
    let (installed, cost_tracking) = ensure_dependencies(ctx, &system)?;

    let backup = if paths.settings.exists() {
        reporter.step("Creating backup...");
        let backup = settings_store::create_backup(&paths.settings)?;
        reporter.success(&format!("Settings backed up to {}", paths.display(&backup)));
        Some(backup)
    } else {
        None
    };

    let config_created = !paths.config.exists();
    if config_created {
        config::save(&paths.config, &config)?;
    }

    reporter.step("Creating status line script...");
    script_generator::generate(&paths.script, &config.colors)?;
    reporter.success("Status line script created");

    reporter.step("Updating Claude Code settings...");
    let document = match settings_store::read_json(&paths.settings) {
        ReadOutcome::Found(document) => document,
        ReadOutcome::Absent => json!({}),
        ReadOutcome::Corrupt(reason) => {
            warn!(%reason, "replacing unreadable settings document");
            reporter.warn("Existing settings could not be parsed; starting from an empty document");
            Value::Object(Default::default())
        }
    };
    let merged = merge_status_line(document, &StatusLineCommand::command(paths.script_command()));
    settings_store::write_json(&paths.settings, &merged)?;
    reporter.success("Claude Code settings updated");

    reporter.step("Testing installation...");
    let self_test = self_test(ctx);
    match &self_test {
        SelfTest::Passed => reporter.success("Installation test passed"),
        SelfTest::Failed(reason) => reporter.warn(&format!("Test warning: {}", reason)),
    }

    info!(installed = ?installed, "installation finished");
    Ok(InstallOutcome::Installed(InstallReport {
        installed,
        backup,
        config_created,
        cost_tracking,
        self_test,
    }))
}

fn load_config<C, P, R>(
    ctx: &AppContext<C, P, R>,
    options: &InstallOptions,
) -> Result<StatuslineConfig, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    match &options.config {
        Some(path) => config::load_explicit(path),
        None => Ok(config::load_or_default(&ctx.paths().config, ctx.reporter())),
    }
}

/// Install missing tools; returns the packages installed and whether cost tracking works.
fn ensure_dependencies<C, P, R>(
    ctx: &AppContext<C, P, R>,
    system: &SystemInfo,
) -> Result<(Vec<String>, bool), AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let runner = ctx.commands();
    let reporter = ctx.reporter();
    let mut installed = Vec::new();

    if system.homebrew {
        reporter.success("Homebrew already installed");
    } else {
        reporter.step("Installing Homebrew...");
        dependency_installer::install_homebrew(runner)?;
        reporter.success("Homebrew installed");
        installed.push(Tool::Homebrew.display_name().to_string());
    }

    if system.jq {
        reporter.success("jq already installed");
    } else {
        reporter.step("Installing jq...");
        dependency_installer::install_with_brew(runner, Tool::Jq.program())?;
        reporter.success("jq installed");
        installed.push(Tool::Jq.display_name().to_string());
    }

    let cost_tracking = if system.ccusage {
        reporter.success("ccusage already installed");
        true
    } else {
        reporter.step("Installing ccusage for cost tracking...");
        match dependency_installer::install_with_brew(runner, Tool::Ccusage.program()) {
            Ok(()) => {
                reporter.success("ccusage installed");
                installed.push(Tool::Ccusage.display_name().to_string());
                true
            }
            Err(err) => {
                warn!(error = %err, "ccusage installation failed");
                reporter.warn("Failed to install ccusage - cost tracking will show N/A");
                reporter.detail("You can install it manually later: brew install ccusage");
                false
            }
        }
    };

    Ok((installed, cost_tracking))
}

fn self_test<C, P, R>(ctx: &AppContext<C, P, R>) -> SelfTest
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    if !ctx.commands().resolve(Tool::Jq.program()) {
        return SelfTest::Failed("jq not found".to_string());
    }

    let output = match script_generator::run_sample(ctx.commands(), &ctx.paths().script) {
        Ok(output) => output,
        Err(err) => return SelfTest::Failed(err.to_string()),
    };
    if output.timed_out {
        return SelfTest::Failed(format!(
            "script did not finish within {}s",
            script_generator::SAMPLE_TIMEOUT.as_secs()
        ));
    }

    let [time, model, ..] = SEGMENT_GLYPHS;
    if output.stdout.contains(time) && output.stdout.contains(model) {
        SelfTest::Passed
    } else {
        SelfTest::Failed("Script output format incorrect".to_string())
    }
}
