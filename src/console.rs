//! Line-based console used by the session.
//!
//! The session only needs two capabilities: show a prompt and read the reply,
//! and print a full line. [`StdConsole`] wires them to a terminal (or any
//! reader/writer pair); [`ScriptedIo`] replays canned input for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line source and sink for an interactive session
pub trait LineIo {
    /// Show `prompt` without a newline and read one line of input.
    ///
    /// The line terminator is stripped. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over a buffered reader and a writer, stdin/stdout by default
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::with_streams(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_streams(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineIo for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Scripted console: hands out queued input lines and records all output
#[derive(Debug, Default)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedIo {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far, prompts included
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Input lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl LineIo for ScriptedIo {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }
}
