//! Terminal implementations of the console primitives

use colored::Colorize;
use dialoguer::Confirm as ConfirmPrompt;
use seaman_redis_core::{Confirm, CoreError, Line, OutputSink, Style};
use std::io::{ErrorKind, IsTerminal, Write};
use tracing::debug;

/// Writes command output to stdout, colored by style.
///
/// Once the reader goes away (`seaman-redis keys | head -1`) the remaining
/// lines are dropped; the command keeps its own exit status.
#[derive(Debug, Default)]
pub struct TerminalOutput {
    closed: bool,
}

impl TerminalOutput {
    fn write_to(&mut self, writer: &mut impl Write, line: Line) {
        if self.closed {
            return;
        }

        let result = match line.style {
            Style::Plain => writeln!(writer, "{}", line.text),
            Style::Info => writeln!(writer, "{}", line.text.green()),
            Style::Comment => writeln!(writer, "{}", line.text.yellow()),
            Style::Error => writeln!(writer, "{}", line.text.red()),
        };

        match result {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("stdout closed, discarding remaining output");
                self.closed = true;
            }
            Err(e) => debug!("Failed to write output: {}", e),
        }
    }
}

impl OutputSink for TerminalOutput {
    fn write_line(&mut self, line: Line) {
        self.write_to(&mut std::io::stdout().lock(), line);
    }
}

/// Yes/no prompt on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str, default: bool) -> seaman_redis_core::Result<bool> {
        if !std::io::stdin().is_terminal() {
            eprintln!("{}", non_interactive_notice(default));
            return Ok(default);
        }

        ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| CoreError::Confirmation(e.to_string()))
    }
}

/// Hint printed when no one can answer the prompt
fn non_interactive_notice(default: bool) -> String {
    let answer = if default { "accepted" } else { "declined" };
    format!(
        "Warning: confirmation {} because stdin is not a terminal. Use --force to skip confirmation.",
        answer
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaman_redis_core::catalog::FLUSH_PROMPT;

    /// Writer whose reader has gone away
    #[derive(Default)]
    struct ClosedPipe {
        attempts: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            self.attempts += 1;
            Err(ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_plain_lines() {
        let mut output = TerminalOutput::default();
        let mut buf = Vec::new();
        output.write_to(&mut buf, Line::plain("Found 2 keys:"));
        output.write_to(&mut buf, Line::plain("  - a"));
        assert_eq!(String::from_utf8(buf).unwrap(), "Found 2 keys:\n  - a\n");
    }

    #[test]
    fn test_closed_pipe_stops_output() {
        let mut output = TerminalOutput::default();
        let mut pipe = ClosedPipe::default();

        output.write_to(&mut pipe, Line::plain("key1"));
        assert!(output.closed);
        let attempts = pipe.attempts;

        output.write_to(&mut pipe, Line::plain("key2"));
        output.write_to(&mut pipe, Line::error("Failed to list keys."));
        assert_eq!(pipe.attempts, attempts);
    }

    #[test]
    fn test_non_interactive_notice() {
        let notice = non_interactive_notice(false);
        assert!(notice.contains("declined"));
        assert!(notice.contains("stdin is not a terminal"));
        assert!(notice.contains("--force"));
        assert!(!notice.contains(FLUSH_PROMPT));
    }
}
