//! Interactive configuration of segments and colors.

use tracing::info;

use crate::app::AppContext;
use crate::app::config;
use crate::domain::statusline_config::validate_color;
use crate::domain::{AppError, ColorScheme, Feature, StatusColors, StatuslineConfig};
use crate::ports::{CommandRunnerPort, PrompterPort, ReporterPort};
use crate::services::script_generator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigureOptions {
    /// Restore the default configuration without prompting.
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Reset,
    Cancelled,
    Saved { config: StatuslineConfig, applied: bool },
}

const INVALID_COLOR_MESSAGE: &str = "Please enter a valid ANSI color code";

pub fn execute<C, P, R>(
    ctx: &AppContext<C, P, R>,
    options: ConfigureOptions,
) -> Result<ConfigureOutcome, AppError>
where
    C: CommandRunnerPort,
    P: PrompterPort,
    R: ReporterPort,
{
    let paths = ctx.paths();
    let reporter = ctx.reporter();

    if options.reset {
        config::save(&paths.config, &StatuslineConfig::default())?;
        reporter.success("Configuration reset to defaults");
        return Ok(ConfigureOutcome::Reset);
    }

    let current = config::load_or_default(&paths.config, reporter);

    let Some(features) = select_features(ctx.prompter(), &current)? else {
        reporter.info("Configuration cancelled");
        return Ok(ConfigureOutcome::Cancelled);
    };
    let Some(colors) = select_colors(ctx.prompter(), &current.colors)? else {
        reporter.info("Configuration cancelled");
        return Ok(ConfigureOutcome::Cancelled);
    };

    let config = StatuslineConfig { colors, ..current.with_features(&features) };
    config::save(&paths.config, &config)?;
    reporter.success(&format!("Configuration saved to {}", paths.display(&paths.config)));
    reporter.info("Preview:");
    reporter.detail(&config.preview());

    let applied = ctx.prompter().confirm("Apply these changes now?", true)? == Some(true);
    if applied {
        script_generator::generate(&paths.script, &config.colors)?;
        reporter.success("Status line updated");
    } else {
        reporter.info("Changes saved. Run 'claude-status install --force' to apply them later");
    }

    info!(applied, "configuration updated");
    Ok(ConfigureOutcome::Saved { config, applied })
}

fn select_features(
    prompter: &impl PrompterPort,
    current: &StatuslineConfig,
) -> Result<Option<Vec<Feature>>, AppError> {
    let labels: Vec<String> = Feature::ALL.iter().map(|f| f.label().to_string()).collect();
    let defaults: Vec<bool> = Feature::ALL.iter().map(|f| current.is_enabled(*f)).collect();

    let chosen = prompter.multi_select("Select features to display", &labels, &defaults)?;
    Ok(chosen.map(|indices| {
        indices.into_iter().filter_map(|i| Feature::ALL.get(i).copied()).collect()
    }))
}

fn select_colors(
    prompter: &impl PrompterPort,
    current: &StatusColors,
) -> Result<Option<StatusColors>, AppError> {
    let labels: Vec<String> = ColorScheme::ALL.iter().map(|s| s.label().to_string()).collect();
    let default = ColorScheme::ALL
        .iter()
        .position(|scheme| scheme.colors().as_ref() == Some(current))
        .unwrap_or(ColorScheme::ALL.len() - 1);

    let Some(index) = prompter.select("Choose color scheme", &labels, default)? else {
        return Ok(None);
    };
    match ColorScheme::ALL.get(index).and_then(ColorScheme::colors) {
        Some(colors) => Ok(Some(colors)),
        None => custom_colors(prompter, current),
    }
}

fn custom_colors(
    prompter: &impl PrompterPort,
    current: &StatusColors,
) -> Result<Option<StatusColors>, AppError> {
    let mut picked = Vec::with_capacity(4);
    for (label, initial) in [
        ("Time color (e.g. \\033[90m)", &current.time),
        ("Model color", &current.model),
        ("Git branch color", &current.git),
        ("Cost color", &current.cost),
    ] {
        match prompter.input(label, initial, color_input)? {
            Some(value) => picked.push(value),
            None => return Ok(None),
        }
    }
    let [time, model, git, cost] = picked.as_slice() else {
        return Ok(None);
    };
    Ok(Some(StatusColors::new(time, model, git, cost)))
}

fn color_input(value: &str) -> Result<(), String> {
    validate_color(value).map_err(|_| INVALID_COLOR_MESSAGE.to_string())
}
