//! Line-oriented console over any reader/writer pair.
//!
//! Sessions talk to a [`Console`] instead of stdin/stdout directly so tests can
//! drive them with in-memory buffers.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one full line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("write console line")?;
        self.output.flush().context("flush console")
    }

    /// Print `prompt` without a newline, then read one line.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has its line
    /// terminator removed but is otherwise untouched. A line that is not valid
    /// UTF-8 is consumed and surfaces as an `io::ErrorKind::InvalidData` error.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("read console line")?;
        if read == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut raw);
        let line = String::from_utf8(raw)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
            .context("decode console line")?;
        Ok(Some(line))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn strip_line_ending(raw: &mut Vec<u8>) {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
}
