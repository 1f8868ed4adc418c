pub mod console_reporter;
pub mod dialoguer_prompter;
pub mod process_command;

pub use console_reporter::ConsoleReporter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use process_command::ProcessCommandRunner;
