//! Formatted console prompts with retry loops.
//!
//! Generic over the reader and writer so the retry behavior is testable
//! against in-memory buffers. Invalid input prints a diagnostic and asks
//! again; end of input stops the loop with `Ok(None)` instead of spinning.

use std::io::{self, BufRead, Write};

use crate::text;

/// Prompt/read/retry driver over an arbitrary line source and sink.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Prompter over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt`, reads one line. `None` means end of input.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Re-prompts until a non-blank line arrives.
    pub fn non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(None);
            };
            if !text::is_blank(&line) {
                return Ok(Some(line));
            }
            writeln!(self.output, "Input must not be empty.")?;
        }
    }

    /// Re-prompts until the line parses as an `i32`.
    pub fn int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(None);
            };
            match text::parse_i32(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "Invalid input. Please enter an integer.")?,
            }
        }
    }

    /// Re-prompts until the line parses as an `i32` within `min..=max`.
    pub fn int_in(&mut self, prompt: &str, min: i32, max: i32) -> io::Result<Option<i32>> {
        loop {
            let Some(value) = self.int(prompt)? else {
                return Ok(None);
            };
            if (min..=max).contains(&value) {
                return Ok(Some(value));
            }
            writeln!(
                self.output,
                "Input out of range. Please enter a value between {min} and {max}."
            )?;
        }
    }

    /// Re-prompts until the line parses as a finite `f64`.
    pub fn float(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(None);
            };
            match text::parse_f64(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}
