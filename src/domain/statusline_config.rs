//! Status line display toggles and color palette.

use serde::{Deserialize, Serialize};

use super::AppError;

/// Shell escape prefix every color code must start with.
pub const COLOR_PREFIX: &str = "\\033[";

/// Shell escape that resets terminal attributes.
pub const COLOR_RESET: &str = "\\033[0m";

/// One color code per status line segment, stored as literal shell escape text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    pub time: String,
    pub model: String,
    pub git: String,
    pub cost: String,
}

impl StatusColors {
    pub fn new(time: &str, model: &str, git: &str, cost: &str) -> Self {
        Self {
            time: time.to_string(),
            model: model.to_string(),
            git: git.to_string(),
            cost: cost.to_string(),
        }
    }

    /// Reject any color that would not survive single-quoted shell embedding.
    pub fn validate(&self) -> Result<(), AppError> {
        for color in [&self.time, &self.model, &self.git, &self.cost] {
            validate_color(color)?;
        }
        Ok(())
    }
}

impl Default for StatusColors {
    fn default() -> Self {
        palette(DEFAULT_CODES)
    }
}

const DEFAULT_CODES: [&str; 4] = ["90", "35", "32", "33"];

fn palette([time, model, git, cost]: [&str; 4]) -> StatusColors {
    let code = |n: &str| format!("{}{}m", COLOR_PREFIX, n);
    StatusColors::new(&code(time), &code(model), &code(git), &code(cost))
}

/// Check a single color code.
pub fn validate_color(value: &str) -> Result<(), AppError> {
    if value.starts_with(COLOR_PREFIX) && !value.contains('\'') {
        Ok(())
    } else {
        Err(AppError::InvalidColor(value.to_string()))
    }
}

/// Persisted status line configuration (`~/.claude/config.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatuslineConfig {
    pub show_time: bool,
    pub show_model: bool,
    pub show_git: bool,
    pub show_cost: bool,
    pub colors: StatusColors,
}

impl Default for StatuslineConfig {
    fn default() -> Self {
        Self {
            show_time: true,
            show_model: true,
            show_git: true,
            show_cost: true,
            colors: StatusColors::default(),
        }
    }
}

impl StatuslineConfig {
    /// Sample line made of the enabled segments only.
    pub fn preview(&self) -> String {
        let segments = [
            (self.show_time, "🕐 12:34:56"),
            (self.show_model, "🤖 Sonnet 4"),
            (self.show_git, "🌿 main"),
            (self.show_cost, "💰 $15.67 today"),
        ];
        segments
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, sample)| *sample)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Replace all four toggles with the given selection.
    pub fn with_features(mut self, enabled: &[Feature]) -> Self {
        self.show_time = enabled.contains(&Feature::Time);
        self.show_model = enabled.contains(&Feature::Model);
        self.show_git = enabled.contains(&Feature::Git);
        self.show_cost = enabled.contains(&Feature::Cost);
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Time => self.show_time,
            Feature::Model => self.show_model,
            Feature::Git => self.show_git,
            Feature::Cost => self.show_cost,
        }
    }
}

/// Status line segment that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Time,
    Model,
    Git,
    Cost,
}

impl Feature {
    pub const ALL: [Feature; 4] = [Feature::Time, Feature::Model, Feature::Git, Feature::Cost];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Time => "🕐 Current time",
            Feature::Model => "🤖 Claude model",
            Feature::Git => "🌿 Git branch",
            Feature::Cost => "💰 Daily cost",
        }
    }
}

/// Named color palettes offered by the configuration workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Default,
    Monochrome,
    Bright,
    Pastel,
    Custom,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Default,
        ColorScheme::Monochrome,
        ColorScheme::Bright,
        ColorScheme::Pastel,
        ColorScheme::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Default => "Default (Gray, Purple, Green, Yellow)",
            ColorScheme::Monochrome => "Monochrome (All white)",
            ColorScheme::Bright => "Bright colors",
            ColorScheme::Pastel => "Pastel colors",
            ColorScheme::Custom => "Custom...",
        }
    }

    /// Preset palette; `None` for [`ColorScheme::Custom`].
    pub fn colors(&self) -> Option<StatusColors> {
        let codes = match self {
            ColorScheme::Default => DEFAULT_CODES,
            ColorScheme::Monochrome => ["37", "37", "37", "37"],
            ColorScheme::Bright => ["96", "95", "92", "93"],
            ColorScheme::Pastel => ["94", "95", "92", "93"],
            ColorScheme::Custom => return None,
        };
        Some(palette(codes))
    }
}
