pub mod error;
pub mod paths;
pub mod settings;
pub mod statusline_config;
pub mod system_info;

pub use error::AppError;
pub use paths::StatuslinePaths;
pub use settings::{STATUS_LINE_KEY, StatusLineCommand};
pub use statusline_config::{ColorScheme, Feature, StatusColors, StatuslineConfig};
pub use system_info::{SystemInfo, Tool};
