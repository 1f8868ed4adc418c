//! Renders and installs the status line shell script.

use std::fs;
use std::path::Path;
use std::time::Duration;

use minijinja::{Environment, UndefinedBehavior, context};
use tracing::{debug, info};

use crate::domain::AppError;
use crate::domain::StatusColors;
use crate::domain::statusline_config::COLOR_RESET;
use crate::ports::{CommandOutput, CommandRequest, CommandRunnerPort};

const TEMPLATE_NAME: &str = "statusline-command.sh";
const TEMPLATE: &str = include_str!("../assets/statusline/statusline-command.sh");

/// Minimal host payload fed to the script when checking it.
pub const SAMPLE_INPUT: &str = r#"{"model":{"display_name":"Test Model"}}"#;

/// Upper bound on a single sample run of the script.
pub const SAMPLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Glyphs that open each segment of the rendered line, in order.
pub const SEGMENT_GLYPHS: [&str; 4] = ["🕐", "🤖", "🌿", "💰"];

/// Render the script body for the given palette.
pub fn render(colors: &StatusColors) -> Result<String, AppError> {
    colors.validate()?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|err| AppError::Template(format!("failed to load template: {}", err)))?;

    env.get_template(TEMPLATE_NAME)
        .map_err(|err| AppError::Template(format!("failed to access template: {}", err)))?
        .render(context! {
            time_color => colors.time,
            model_color => colors.model,
            git_color => colors.git,
            cost_color => colors.cost,
            reset => COLOR_RESET,
        })
        .map_err(|err| AppError::Template(err.to_string()))
}

/// Write the rendered script to `target` and make it executable by its owner.
pub fn generate(target: &Path, colors: &StatusColors) -> Result<(), AppError> {
    let script = render(colors)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, &script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(target)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(target, perms)?;
    }

    info!(path = %target.display(), "generated status line script");
    Ok(())
}

/// Run the installed script once with [`SAMPLE_INPUT`] under `bash`.
pub fn run_sample(
    runner: &impl CommandRunnerPort,
    script: &Path,
) -> Result<CommandOutput, AppError> {
    let script = script.to_string_lossy();
    let args = [script.as_ref()];
    let request =
        CommandRequest::new("bash", &args).with_input(SAMPLE_INPUT).with_timeout(SAMPLE_TIMEOUT);
    let output = runner.run(&request)?;
    debug!(exit_code = ?output.exit_code, timed_out = output.timed_out, "sample run finished");
    Ok(output)
}
