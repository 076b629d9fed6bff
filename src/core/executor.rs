//! External command execution for toolchain checks.
//!
//! Commands run through `sh -c` with stderr folded into stdout, so the
//! captured text keeps the order the process produced it in. Execution
//! failures are reported as a failed [`CommandResult`], never as an error.

use serde::Serialize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Exit status and interleaved stdout/stderr of one command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub output: String,
}

impl CommandResult {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

pub trait CommandExecutor {
    /// Run `command` in `working_dir`. Must not panic and must not block on stdin.
    fn run(&self, command: &str, working_dir: &Path) -> CommandResult;
}

/// Runs commands through the system shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &str, working_dir: &Path) -> CommandResult {
        let script = format!("exec 2>&1\n{}", command);
        let output = match Command::new("sh")
            .arg("-c")
            .arg(&script)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => return CommandResult::new(1, format!("Failed to run `{}`: {}", command, e)),
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        // Anything the shell itself wrote before the redirect took effect.
        if !output.stderr.is_empty() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        match output.status.code() {
            Some(code) => CommandResult::new(code, text),
            None => {
                text.push_str(&format!("\n`{}` terminated by signal", command));
                CommandResult::new(1, text)
            }
        }
    }
}
