//! Host-side console primitives consumed by the dispatch layer

use std::fmt;

use crate::error::Result;

/// Presentation hint for a line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Info,
    Comment,
    Error,
}

/// One line written to the host's output sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(Style::Plain, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::styled(Style::Info, text)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::styled(Style::Comment, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(Style::Error, text)
    }

    fn styled(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Where command output goes
pub trait OutputSink {
    fn write_line(&mut self, line: Line);
}

/// Collects lines in memory
impl OutputSink for Vec<Line> {
    fn write_line(&mut self, line: Line) {
        self.push(line);
    }
}

/// Interactive yes/no prompt owned by the host
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Ask `prompt`; `default` is the answer when the operator just hits enter
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}
