use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing rendered configuration text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Line buffer for rendering a device configuration.
///
/// Top-level statements are written flush left; block members are prefixed
/// with the writer's indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWriter {
    lines: Vec<String>,
    indent: String,
}

impl ConfigWriter {
    /// Create a writer whose block members are indented by `indent` spaces.
    pub fn new(indent: usize) -> Self {
        Self {
            lines: Vec::new(),
            indent: " ".repeat(indent),
        }
    }

    /// Append a top-level line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an indented block member line.
    pub fn child(&mut self, line: impl AsRef<str>) {
        self.lines.push(format!("{}{}", self.indent, line.as_ref()));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with `\n`. No trailing newline is added.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Write rendered text to `path`, adding a trailing newline when missing.
pub fn write_file(text: &str, path: &Path) -> Result<(), WriteError> {
    if text.is_empty() || text.ends_with('\n') {
        fs::write(path, text)?;
    } else {
        fs::write(path, format!("{text}\n"))?;
    }
    Ok(())
}
