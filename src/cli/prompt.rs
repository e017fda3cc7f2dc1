//! Reading order fields from the user.
//!
//! A terminal gets `dialoguer` prompts; anything else (pipes, files, tests) is
//! read one line per field.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::Result;

/// Source of answers for the order prompts.
pub trait Prompter {
    /// Show `label` and return the answer with surrounding whitespace removed.
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Interactive prompts on a terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

/// Line-oriented prompts over any reader and writer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before '{label}' was answered"),
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}

/// Pick the prompter for this process's stdin.
///
/// Line prompts go to stderr in JSON mode so stdout stays machine-readable.
pub fn stdin_prompter(json: bool) -> Box<dyn Prompter> {
    let stdin = io::stdin();
    if stdin.is_terminal() && !json {
        return Box::new(TerminalPrompter::new());
    }

    let writer: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    Box::new(LinePrompter::new(stdin.lock(), writer))
}
