pub mod adapters;
pub mod dependency_installer;
pub mod environment_probe;
pub mod script_generator;
pub mod settings_store;

pub use adapters::{ConsoleReporter, DialoguerPrompter, ProcessCommandRunner};
pub use settings_store::ReadOutcome;
