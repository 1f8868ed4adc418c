use std::env::consts::OS;

use tracing::debug;

use crate::domain::{SystemInfo, Tool};
use crate::ports::CommandRunnerPort;

/// Detect the platform and which external tools are reachable.
pub fn probe(runner: &impl CommandRunnerPort) -> SystemInfo {
    probe_platform(OS, runner)
}

/// Probe with an explicit platform name (as reported by `std::env::consts::OS`).
pub fn probe_platform(platform: &str, runner: &impl CommandRunnerPort) -> SystemInfo {
    let info = SystemInfo {
        platform: platform.to_string(),
        is_macos: platform == "macos",
        homebrew: runner.resolve(Tool::Homebrew.program()),
        jq: runner.resolve(Tool::Jq.program()),
        ccusage: runner.resolve(Tool::Ccusage.program()),
        git: runner.resolve(Tool::Git.program()),
    };
    debug!(?info, "probed environment");
    info
}
