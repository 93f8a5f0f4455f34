//! Process executor seam
//!
//! The core never spawns processes itself. It hands an [`Invocation`] to
//! whatever [`ProcessExecutor`] it was constructed with.

use crate::invocation::Invocation;

/// Result of running an invocation
///
/// Interactive runs stream to the operator's terminal, so their `stdout` and
/// `stderr` are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Exit code 0 with no captured output
    pub fn success() -> Self {
        Self::default()
    }

    /// Non-zero outcome for a program that could not be started
    pub fn launch_failure(exit_code: i32, reason: impl Into<String>) -> Self {
        Self::new(exit_code, "", reason)
    }

    /// Exit code 0 is the only success signal
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs invocations on behalf of the dispatch layer.
///
/// Implementations must run synchronously from the caller's point of view.
/// A program that cannot be started is reported as a non-zero outcome.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> ExecutionOutcome;
}

impl<E: ProcessExecutor + ?Sized> ProcessExecutor for &E {
    fn execute(&self, invocation: &Invocation) -> ExecutionOutcome {
        (**self).execute(invocation)
    }
}

impl<E: ProcessExecutor + ?Sized> ProcessExecutor for Box<E> {
    fn execute(&self, invocation: &Invocation) -> ExecutionOutcome {
        (**self).execute(invocation)
    }
}
