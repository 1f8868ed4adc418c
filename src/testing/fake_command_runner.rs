use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRequest, CommandRunnerPort};

/// Command runner that answers from canned responses.
///
/// A successful `brew install <pkg>` makes `<pkg>` resolvable afterwards.
#[derive(Default)]
pub struct FakeCommandRunner {
    pub tools: Mutex<HashSet<String>>,
    pub responses: Mutex<HashMap<String, CommandOutput>>,
    pub failing_attached: Mutex<HashSet<String>>,
    pub inputs: Mutex<Vec<Option<String>>>,
    pub attached_calls: Mutex<Vec<String>>,
    pub search_paths: Mutex<Vec<PathBuf>>,
}

impl FakeCommandRunner {
    pub fn with_tools(tools: &[&str]) -> Self {
        let runner = Self::default();
        runner.tools.lock().unwrap().extend(tools.iter().map(|t| t.to_string()));
        runner
    }

    pub fn respond(&self, command: &str, output: CommandOutput) {
        self.responses.lock().unwrap().insert(command.to_string(), output);
    }

    pub fn fail_attached(&self, command: &str) {
        self.failing_attached.lock().unwrap().insert(command.to_string());
    }

    pub fn last_input(&self) -> Option<String> {
        self.inputs.lock().unwrap().last().cloned().flatten()
    }

    pub fn attached_calls(&self) -> Vec<String> {
        self.attached_calls.lock().unwrap().clone()
    }

    pub fn search_path_additions(&self) -> Vec<PathBuf> {
        self.search_paths.lock().unwrap().clone()
    }
}

impl CommandRunnerPort for FakeCommandRunner {
    fn resolve(&self, program: &str) -> bool {
        self.tools.lock().unwrap().contains(program)
    }

    fn run(&self, request: &CommandRequest<'_>) -> Result<CommandOutput, AppError> {
        let display = request.display();
        self.inputs.lock().unwrap().push(request.input.map(str::to_string));

        Ok(self.responses.lock().unwrap().get(&display).cloned().unwrap_or(CommandOutput {
            stderr: format!("{}: command not found", request.program),
            exit_code: Some(127),
            ..CommandOutput::default()
        }))
    }

    fn run_attached(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let display = CommandRequest::new(program, args).display();
        self.attached_calls.lock().unwrap().push(display.clone());

        if self.failing_attached.lock().unwrap().contains(&display) {
            return Err(AppError::CommandFailed {
                command: display,
                details: "exited with status 1".to_string(),
            });
        }
        if let ["install", package] = args {
            self.tools.lock().unwrap().insert(package.to_string());
        }
        Ok(())
    }

    fn extend_search_path(&self, dir: &Path) {
        self.search_paths.lock().unwrap().push(dir.to_path_buf());
    }
}
