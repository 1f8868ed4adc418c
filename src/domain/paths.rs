use std::path::{Path, PathBuf};

use super::AppError;

/// The assistant's per-user directory name.
pub const CLAUDE_DIR: &str = ".claude";

/// Host assistant settings file name.
pub const SETTINGS_FILE: &str = "settings.json";

/// Generated status line script file name.
pub const SCRIPT_FILE: &str = "statusline-command.sh";

/// Status line configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Infix between the settings file name and a backup timestamp.
pub const BACKUP_INFIX: &str = ".backup.";

/// Fixed set of filesystem locations used by every workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatuslinePaths {
    pub home: PathBuf,
    pub settings: PathBuf,
    pub script: PathBuf,
    pub config: PathBuf,
}

impl StatuslinePaths {
    /// Build the path set rooted at an explicit home directory.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let claude = home.join(CLAUDE_DIR);
        Self {
            settings: claude.join(SETTINGS_FILE),
            script: claude.join(SCRIPT_FILE),
            config: claude.join(CONFIG_FILE),
            home,
        }
    }

    /// Build the path set for the invoking user.
    pub fn resolve() -> Result<Self, AppError> {
        dirs::home_dir().map(Self::for_home).ok_or(AppError::HomeDirectoryUnavailable)
    }

    /// `~/.claude/`
    pub fn claude_dir(&self) -> PathBuf {
        self.home.join(CLAUDE_DIR)
    }

    /// Command line stored under `statusLine.command` in the settings document.
    pub fn script_command(&self) -> String {
        format!("bash {}", self.script.display())
    }

    /// File name prefix shared by every settings backup.
    pub fn backup_prefix(&self) -> String {
        let name = self.settings.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        format!("{}{}", name, BACKUP_INFIX)
    }

    /// Abbreviate a path under the home directory with `~`.
    pub fn display(&self, path: &Path) -> String {
        match path.strip_prefix(&self.home) {
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => path.display().to_string(),
        }
    }
}
