//! Test doubles shared by unit tests.

use crate::core::executor::{CommandExecutor, CommandResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Executor returning canned results and recording every command it was asked to run.
#[derive(Default)]
pub struct ScriptedExecutor {
    results: HashMap<String, CommandResult>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, command: &str, exit_code: i32, output: &str) -> Self {
        self.results
            .insert(command.to_string(), CommandResult::new(exit_code, output));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn run(&self, command: &str, _working_dir: &Path) -> CommandResult {
        self.calls.borrow_mut().push(command.to_string());
        self.results
            .get(command)
            .cloned()
            .unwrap_or_else(|| CommandResult::new(0, ""))
    }
}
