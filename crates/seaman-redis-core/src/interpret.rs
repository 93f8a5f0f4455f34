//! Result interpreter
//!
//! Maps an [`ExecutionOutcome`] to a [`CommandStatus`] and the lines shown to
//! the operator. Captured stderr is never shown; failures surface a fixed
//! message per command so output stays stable.

use serde::Serialize;
use tracing::debug;

use crate::console::Line;
use crate::executor::ExecutionOutcome;

/// Final status of a logical command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl CommandStatus {
    /// Process exit code reported to the host
    pub fn code(self) -> i32 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == CommandStatus::Success
    }
}

impl From<&ExecutionOutcome> for CommandStatus {
    fn from(outcome: &ExecutionOutcome) -> Self {
        if outcome.is_success() {
            CommandStatus::Success
        } else {
            CommandStatus::Failure
        }
    }
}

/// How a command formats a successful outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum ResultPolicy {
    /// Raw stdout as-is
    Verbatim,
    /// A fixed heading followed by raw stdout
    Banner(&'static str),
    /// Newline-separated key names, counted and listed
    KeyList,
    /// A fixed message, stdout discarded
    Message(&'static str),
    /// Nothing; the exit code is the whole result
    StatusOnly,
}

/// Lines to display plus the final status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub lines: Vec<Line>,
    pub status: CommandStatus,
}

/// Apply `policy` to `outcome`.
///
/// On failure only `failure_message` is shown (nothing when it is `None`).
pub fn interpret(
    policy: ResultPolicy,
    failure_message: Option<&str>,
    outcome: &ExecutionOutcome,
) -> Interpretation {
    let status = CommandStatus::from(outcome);

    if !status.is_success() {
        debug!(
            "Command exited with {} (stderr: {:?})",
            outcome.exit_code, outcome.stderr
        );
        return Interpretation {
            lines: failure_message.map(Line::error).into_iter().collect(),
            status,
        };
    }

    let lines = match policy {
        ResultPolicy::Verbatim => vec![Line::plain(outcome.stdout.as_str())],
        ResultPolicy::Banner(banner) => {
            vec![Line::info(banner), Line::plain(outcome.stdout.as_str())]
        }
        ResultPolicy::KeyList => format_keys(&parse_keys(&outcome.stdout)),
        ResultPolicy::Message(message) => vec![Line::info(message)],
        ResultPolicy::StatusOnly => Vec::new(),
    };

    Interpretation { lines, status }
}

/// Split `KEYS` output into key names, dropping empty entries
pub fn parse_keys(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect()
}

fn format_keys(keys: &[&str]) -> Vec<Line> {
    if keys.is_empty() {
        return vec![Line::comment("No keys found.")];
    }

    let mut lines = Vec::with_capacity(keys.len() + 1);
    lines.push(Line::info(format!("Found {} keys:", keys.len())));
    lines.extend(keys.iter().map(|key| Line::plain(format!("  - {}", key))));
    lines
}
