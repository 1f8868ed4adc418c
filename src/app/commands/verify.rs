//! Installation self-check. Every check is reported; none of them aborts the run.

use std::path::Path;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::settings::status_line_of;
use crate::domain::{AppError, Tool};
use crate::ports::{CommandRunnerPort, PrompterPort, ReporterPort};
use crate::services::environment_probe::probe_platform;
use crate::services::script_generator::{self, SEGMENT_GLYPHS};
use crate::services::settings_store::{self, ReadOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Print the details gathered by each check.
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub checks: Vec<CheckResult>,
}

impl VerifyOutcome {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Outcome of one check before it is labelled.
struct Check {
    passed: bool,
    details: Vec<String>,
}

impl Check {
    fn new(passed: bool, details: Vec<String>) -> Self {
        Self { passed, details }
    }
}

type CheckFn<C, P, R> = fn(&AppContext<C, P, R>) -> Result<Check, AppError>;

/// Number of checks a full run performs.
pub const CHECK_COUNT: usize = 5;

pub fn execute<C, P, R>(ctx: &AppContext<C, P, R>, options: VerifyOptions) -> VerifyOutcome
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let checks: [(&'static str, CheckFn<C, P, R>); CHECK_COUNT] = [
        ("platform compatibility", check_platform),
        ("required files", check_files),
        ("dependencies", check_dependencies),
        ("script execution", check_script),
        ("settings configuration", check_settings),
    ];

    let reporter = ctx.reporter();
    let mut results = Vec::with_capacity(checks.len());
    for (name, check) in checks {
        reporter.step(&format!("Testing {}...", name));
        let check = check(ctx).unwrap_or_else(|err| {
            debug!(check = name, error = %err, "check raised an error");
            Check::new(false, vec![format!("Error: {}", err)])
        });

        if check.passed {
            reporter.success(&format!("{} passed", capitalize(name)));
        } else {
            reporter.error(&format!("{} failed", capitalize(name)));
        }
        if options.verbose {
            for line in &check.details {
                reporter.detail(line);
            }
        }
        results.push(CheckResult { name, passed: check.passed, details: check.details });
    }

    VerifyOutcome { checks: results }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn mark(present: bool) -> &'static str {
    if present { "✓" } else { "✗" }
}

fn check_platform<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<Check, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let platform = ctx.platform();
    Ok(Check::new(platform == "macos", vec![format!("Platform: {}", platform)]))
}

fn check_files<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<Check, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let paths = ctx.paths();
    let script = paths.script.exists();
    let executable = is_executable(&paths.script)?;
    let settings = paths.settings.exists();
    Ok(Check::new(
        script && executable && settings,
        vec![
            format!("Script: {} {}", mark(script), paths.display(&paths.script)),
            format!("Script executable: {}", mark(executable)),
            format!("Settings: {} {}", mark(settings), paths.display(&paths.settings)),
        ],
    ))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool, AppError> {
    use std::os::unix::fs::PermissionsExt;
    if !path.exists() {
        return Ok(false);
    }
    Ok(path.metadata()?.permissions().mode() & 0o100 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> Result<bool, AppError> {
    Ok(path.exists())
}

fn check_dependencies<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<Check, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let system = probe_platform(ctx.platform(), ctx.commands());
    let details = [Tool::Jq, Tool::Homebrew, Tool::Ccusage, Tool::Git]
        .into_iter()
        .map(|tool| {
            let optional = matches!(tool, Tool::Ccusage | Tool::Git);
            format!(
                "{}: {}{}",
                tool.display_name(),
                mark(system.has(tool)),
                if optional { " (optional)" } else { "" }
            )
        })
        .collect();
    Ok(Check::new(system.jq && system.homebrew, details))
}

fn check_script<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<Check, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let script = &ctx.paths().script;
    if !script.exists() {
        return Ok(Check::new(false, vec!["Script not found".to_string()]));
    }

    let output = script_generator::run_sample(ctx.commands(), script)?;
    if output.timed_out {
        return Ok(Check::new(
            false,
            vec![format!(
                "Script did not finish within {}s",
                script_generator::SAMPLE_TIMEOUT.as_secs()
            )],
        ));
    }

    let line = output.stdout.trim();
    let complete = SEGMENT_GLYPHS.iter().all(|glyph| line.contains(glyph));
    let mut details = vec![format!("Output: {}", line)];
    if !output.stderr.trim().is_empty() {
        details.push(format!("Stderr: {}", output.stderr.trim()));
    }
    Ok(Check::new(output.success() && complete, details))
}

fn check_settings<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<Check, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let check = match settings_store::read_json(&ctx.paths().settings) {
        ReadOutcome::Found(document) => match status_line_of(&document) {
            Some(descriptor) => Check::new(
                descriptor.targets_generated_script(),
                vec![format!("Command: {}", descriptor.command)],
            ),
            None => Check::new(false, vec!["No statusLine entry in settings".to_string()]),
        },
        ReadOutcome::Absent => Check::new(false, vec!["Settings file not found".to_string()]),
        ReadOutcome::Corrupt(reason) => {
            Check::new(false, vec![format!("Settings file unreadable: {}", reason)])
        }
    };
    Ok(check)
}
