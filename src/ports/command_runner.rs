use std::path::Path;
use std::time::Duration;

use crate::domain::AppError;

/// A captured subprocess invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandRequest<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
    /// Text written to the child's standard input.
    pub input: Option<&'a str>,
    /// Kill the child once this elapses.
    pub timeout: Option<Duration>,
}

impl<'a> CommandRequest<'a> {
    pub fn new(program: &'a str, args: &'a [&'a str]) -> Self {
        Self { program, args, input: None, timeout: None }
    }

    pub fn with_input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program).chain(self.args.iter().copied()).collect::<Vec<_>>().join(" ")
    }
}

/// Result of a captured subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the child was killed by a signal or the timeout.
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Port for resolving and running external commands.
pub trait CommandRunnerPort {
    /// Whether `program` resolves to an executable on the search path.
    fn resolve(&self, program: &str) -> bool;

    /// Run a command with captured output.
    ///
    /// Errors only when the child cannot be spawned; a nonzero exit is reported
    /// through [`CommandOutput::exit_code`].
    fn run(&self, request: &CommandRequest<'_>) -> Result<CommandOutput, AppError>;

    /// Run a command attached to the terminal, failing on a nonzero exit.
    fn run_attached(&self, program: &str, args: &[&str]) -> Result<(), AppError>;

    /// Prepend a directory to the search path used for later lookups and children.
    fn extend_search_path(&self, dir: &Path);
}
