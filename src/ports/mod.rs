mod command_runner;
mod prompter;
mod reporter;

pub use command_runner::{CommandOutput, CommandRequest, CommandRunnerPort};
pub use prompter::{PrompterPort, TextValidator};
pub use reporter::ReporterPort;
