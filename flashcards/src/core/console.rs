// src/core/console.rs
use crate::core::transcript::Transcript;
use crate::error::{DeckError, Result};
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O that records both directions into a [`Transcript`].
///
/// All user interaction goes through [`Console::say`] and [`Console::read_line`], so the
/// transcript always holds the full conversation.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            transcript: Transcript::new(),
        }
    }

    /// Prints `line` and appends it to the transcript.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl Into<String>) -> Result<()> {
        let line = line.into();
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        self.transcript.push(line);
        Ok(())
    }

    /// Reads one line of input, trims surrounding whitespace and appends it to the transcript.
    ///
    /// # Errors
    ///
    /// * `DeckError::InputClosed` when the input has no more lines
    /// * `DeckError::Io` when reading fails
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(DeckError::InputClosed);
        }
        let line = buf.trim().to_owned();
        self.transcript.push(line.clone());
        Ok(line)
    }

    #[inline]
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[inline]
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
