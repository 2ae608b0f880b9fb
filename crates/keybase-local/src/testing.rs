//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::Result;
use crate::process::ProcessTable;
use crate::runner::{CommandOutput, Runner};
use crate::settings::{DEFAULT_DAEMON_PROCESS, DEFAULT_KBFS_PROCESS};

/// One invocation seen by [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub args: Vec<String>,
    pub input: Option<String>,
}

/// Runner that replays canned outputs in order and records every call.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    responses: RefCell<VecDeque<CommandOutput>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run printing `stdout`.
    pub fn respond(self, stdout: &str) -> Self {
        self.responses.borrow_mut().push_back(CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
        self
    }

    /// Queue a failed run.
    pub fn fail(self, code: i32, stderr: &str) -> Self {
        self.responses.borrow_mut().push_back(CommandOutput {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("runner was never called")
    }

    /// The stdin of the last call, parsed as JSON.
    pub fn last_input_json(&self) -> serde_json::Value {
        let input = self.last_call().input.expect("last call had no stdin");
        serde_json::from_str(&input).expect("stdin should be JSON")
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, args: &[&str], input: Option<&str>) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            args: args.iter().map(|a| a.to_string()).collect(),
            input: input.map(String::from),
        });
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected keybase call: {:?}", args));
        Ok(response)
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("keybase {}", args.join(" "))
    }
}

/// Process table with a fixed list of names.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeProcesses(pub Vec<&'static str>);

impl FakeProcesses {
    pub fn running() -> Self {
        Self(vec!["init", DEFAULT_DAEMON_PROCESS, DEFAULT_KBFS_PROCESS])
    }

    pub fn stopped() -> Self {
        Self(vec!["init"])
    }
}

impl ProcessTable for FakeProcesses {
    fn process_names(&self) -> Vec<String> {
        self.0.iter().map(|s| s.to_string()).collect()
    }
}
