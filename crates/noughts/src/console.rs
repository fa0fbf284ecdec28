//! Line-based terminal console.

use noughts_engine::Console;
use std::io::{BufRead, Write};

/// [`Console`] over any line reader and writer (stdin/stdout in the binary).
pub struct TerminalConsole<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> TerminalConsole<I, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<I: BufRead, W: Write> Console for TerminalConsole<I, W> {
    fn request(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Raw bytes: a stray non-UTF-8 byte is bad input, not a broken stream.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Keep the next output off the prompt line.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn notify(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}
