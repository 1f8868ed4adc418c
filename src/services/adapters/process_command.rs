use std::cell::RefCell;
use std::env;
use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use tracing::debug;
use wait_timeout::ChildExt;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRequest, CommandRunnerPort};

/// Runs commands with `std::process`, honoring directories added at runtime.
#[derive(Debug, Default)]
pub struct ProcessCommandRunner {
    extra_paths: RefCell<Vec<PathBuf>>,
}

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `PATH` with runtime additions prepended; `None` when nothing was added.
    fn search_path(&self) -> Option<OsString> {
        let extra = self.extra_paths.borrow();
        if extra.is_empty() {
            return None;
        }
        let mut dirs = extra.clone();
        if let Some(current) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&current));
        }
        env::join_paths(dirs).ok()
    }

    fn command(&self, program: &str) -> Command {
        match self.search_path() {
            Some(path) => {
                let cwd = env::current_dir().unwrap_or_default();
                let resolved = which::which_in(program, Some(&path), cwd)
                    .map(PathBuf::into_os_string)
                    .unwrap_or_else(|_| OsString::from(program));
                let mut command = Command::new(resolved);
                command.env("PATH", path);
                command
            }
            None => Command::new(program),
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = pipe.read_to_end(&mut buffer);
        buffer
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> String {
    reader
        .and_then(|handle| handle.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).trim_end().to_string())
        .unwrap_or_default()
}

impl CommandRunnerPort for ProcessCommandRunner {
    fn resolve(&self, program: &str) -> bool {
        let found = match self.search_path() {
            Some(path) => {
                let cwd = env::current_dir().unwrap_or_default();
                which::which_in(program, Some(path), cwd).is_ok()
            }
            None => which::which(program).is_ok(),
        };
        debug!(program, found, "resolved command");
        found
    }

    fn run(&self, request: &CommandRequest<'_>) -> Result<CommandOutput, AppError> {
        debug!(command = %request.display(), timeout = ?request.timeout, "running command");

        let mut command = self.command(request.program);
        command
            .args(request.args)
            .stdin(if request.input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|err| AppError::CommandFailed {
            command: request.display(),
            details: err.to_string(),
        })?;

        if let (Some(input), Some(mut stdin)) = (request.input, child.stdin.take())
            && let Err(err) = stdin.write_all(input.as_bytes())
        {
            debug!(error = %err, "child closed stdin early");
        }

        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let status = match request.timeout {
            Some(timeout) => match child.wait_timeout(timeout)? {
                Some(status) => status,
                None => {
                    let _ = child.kill();
                    let _ = child.wait();
                    debug!(command = %request.display(), "command timed out");
                    // Readers may be held open by grandchildren; leave them detached.
                    return Ok(CommandOutput { timed_out: true, ..CommandOutput::default() });
                }
            },
            None => child.wait()?,
        };

        let output = CommandOutput {
            stdout: collect(stdout),
            stderr: collect(stderr),
            exit_code: status.code(),
            timed_out: false,
        };
        debug!(exit_code = ?output.exit_code, "command finished");
        Ok(output)
    }

    fn run_attached(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let shown = CommandRequest::new(program, args).display();
        debug!(command = %shown, "running attached command");

        let status = self
            .command(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| AppError::CommandFailed {
                command: shown.clone(),
                details: err.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                command: shown,
                details: match status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                },
            });
        }
        Ok(())
    }

    fn extend_search_path(&self, dir: &Path) {
        let mut extra = self.extra_paths.borrow_mut();
        if !extra.iter().any(|existing| existing == dir) {
            debug!(dir = %dir.display(), "extending search path");
            extra.insert(0, dir.to_path_buf());
        }
    }
}
