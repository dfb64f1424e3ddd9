//! proctor-console — Terminal implementations of the exam I/O collaborators.
//!
//! [`TerminalScreen`] renders exam output (correct-answer reveals in green)
//! and [`LineSource`] collects respondent input one line at a time. Both are
//! generic over the underlying stream so tests can capture output and script
//! input without a terminal.

use std::io::{self, BufRead, BufReader, Stdin, Write};

use anyhow::Context;
use colored::Colorize;

use proctor_core::traits::{AnswerSource, ExamScreen};

/// Output renderer writing to any [`Write`] target.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    /// A screen over the real terminal.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ExamScreen for TerminalScreen<W> {
    fn show(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn prompt(&mut self, text: &str) {
        let _ = write!(self.out, "{text}");
        let _ = self.out.flush();
    }

    fn reveal(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text.green());
    }
}

/// Input provider reading one line per request from any [`BufRead`] source.
pub struct LineSource<R: BufRead> {
    input: R,
}

impl LineSource<BufReader<Stdin>> {
    /// A source over the real standard input.
    pub fn stdin() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> AnswerSource for LineSource<R> {
    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read respondent input")?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
