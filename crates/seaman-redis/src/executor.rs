//! Process executor backed by `std::process`

use seaman_redis_core::{ExecutionOutcome, Invocation, ProcessExecutor};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Exit code reported when the launcher itself cannot be started
pub const LAUNCH_FAILURE_CODE: i32 = 127;

/// Runs invocations as child processes.
///
/// Interactive invocations inherit the terminal; everything else runs with
/// stdin closed and both output streams captured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, invocation: &Invocation) -> ExecutionOutcome {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args());
        run(cmd, invocation.is_interactive())
    }
}

fn run(mut cmd: Command, interactive: bool) -> ExecutionOutcome {
    let program = cmd.get_program().to_string_lossy().into_owned();

    if interactive {
        return match cmd.status() {
            Ok(status) => ExecutionOutcome::new(exit_code(status), "", ""),
            Err(e) => launch_failure(&program, e),
        };
    }

    match cmd.stdin(Stdio::null()).output() {
        Ok(output) => {
            let outcome = ExecutionOutcome::new(
                exit_code(output.status),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            );
            debug!(
                "{} captured {} bytes of stdout, {} bytes of stderr",
                program,
                outcome.stdout.len(),
                outcome.stderr.len()
            );
            outcome
        }
        Err(e) => launch_failure(&program, e),
    }
}

fn launch_failure(program: &str, err: std::io::Error) -> ExecutionOutcome {
    warn!("Failed to start {}: {}", program, err);
    ExecutionOutcome::launch_failure(
        LAUNCH_FAILURE_CODE,
        format!("Failed to start {}: {}", program, err),
    )
}

/// Exit code of a finished child; signal terminations map to `128 + signal`
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn test_captures_stdout_and_stderr() {
        let outcome = run(sh("printf 'key1\\nkey2'; printf oops >&2"), false);
        assert!(outcome.is_success());
        assert_eq!(outcome.stdout, "key1\nkey2");
        assert_eq!(outcome.stderr, "oops");
    }

    #[test]
    fn test_propagates_exit_code() {
        let outcome = run(sh("exit 3"), false);
        assert_eq!(outcome.exit_code, 3);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_interactive_yields_exit_code_only() {
        let outcome = run(sh("exit 0"), true);
        assert!(outcome.is_success());
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn test_missing_program_is_launch_failure() {
        let outcome = run(Command::new("seaman-redis-no-such-program"), false);
        assert_eq!(outcome.exit_code, LAUNCH_FAILURE_CODE);
        assert!(outcome.stderr.contains("seaman-redis-no-such-program"));
    }

    #[test]
    fn test_signal_exit_code() {
        let outcome = run(sh("kill -TERM $$"), false);
        assert_eq!(outcome.exit_code, 128 + 15);
    }
}
