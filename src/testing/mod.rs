mod fake_command_runner;
mod recording_reporter;
mod scripted_prompter;

pub use fake_command_runner::FakeCommandRunner;
pub use recording_reporter::RecordingReporter;
pub use scripted_prompter::{Answer, ScriptedPrompter};

use tempfile::TempDir;

use crate::app::AppContext;
use crate::domain::StatuslinePaths;

pub type TestContext = AppContext<FakeCommandRunner, ScriptedPrompter, RecordingReporter>;

/// Context on macOS with an isolated home, the given tools and scripted answers.
pub fn test_context(tools: &[&str], answers: Vec<Answer>) -> (TempDir, TestContext) {
    let home = TempDir::new().expect("Failed to create temp home");
    let ctx = AppContext::new(
        StatuslinePaths::for_home(home.path()),
        FakeCommandRunner::with_tools(tools),
        ScriptedPrompter::new(answers),
        RecordingReporter::new(),
    )
    .with_platform("macos");
    (home, ctx)
}
