// ⌨️ Prompt Loop - read → validate → accept or re-prompt
// Generic over the reader/writer so sessions run the same against a terminal
// or an in-memory buffer.

use crate::error::LabResult;
use std::fmt::Display;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed (Ctrl-D / end of piped stdin)
    #[error("input closed by user")]
    Interrupted,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print a line made of `ch` repeated `width` times
    pub fn rule(&mut self, ch: char, width: usize) -> PromptResult<()> {
        let line: String = std::iter::repeat(ch).take(width).collect();
        self.say(line)
    }

    /// Title followed by a `=` rule of the same width
    pub fn heading(&mut self, title: &str, width: usize) -> PromptResult<()> {
        self.say(title)?;
        self.rule('=', width)
    }

    /// Show `prompt`, read one line, return it trimmed
    pub fn ask(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed while prompting");
            return Err(PromptError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking until `parse` accepts the line. Each rejection is printed
    /// and logged before re-prompting.
    pub fn ask_parsed<T, F>(&mut self, prompt: &str, mut parse: F) -> PromptResult<T>
    where
        F: FnMut(&str) -> LabResult<T>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(input = %line, code = e.kind().as_str(), error = %e, "input rejected");
                    self.say(format!("Error: {}", e))?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
