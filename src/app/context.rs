use std::env::consts::OS;

use crate::domain::StatuslinePaths;
use crate::ports::{CommandRunnerPort, PrompterPort, ReporterPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CommandRunnerPort, P: PrompterPort, R: ReporterPort> {
    paths: StatuslinePaths,
    commands: C,
    prompter: P,
    reporter: R,
    platform: String,
}

impl<C: CommandRunnerPort, P: PrompterPort, R: ReporterPort> AppContext<C, P, R> {
    /// Create a new application context for the host platform.
    pub fn new(paths: StatuslinePaths, commands: C, prompter: P, reporter: R) -> Self {
        Self { paths, commands, prompter, reporter, platform: OS.to_string() }
    }

    /// Override the detected platform name.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn paths(&self) -> &StatuslinePaths {
        &self.paths
    }

    /// Get a reference to the command runner.
    pub fn commands(&self) -> &C {
        &self.commands
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }
}
