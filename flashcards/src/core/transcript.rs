// src/core/transcript.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

/// Everything shown to and typed by the user, in the order it happened.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Writes the transcript to `path`, one newline-terminated entry per line.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be created
    /// * Writing any line fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for line in &self.lines {
            writeln!(writer, "{line}")
                .with_context(|| format!("Failed to write log file: {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write log file: {}", path.display()))?;
        Ok(())
    }
}
