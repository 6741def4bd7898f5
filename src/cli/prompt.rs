//! Operator prompts
//!
//! The [`Prompter`] trait hides where answers come from: dialoguer on a
//! terminal, plain line reads otherwise (pipes, scripts, tests).

use std::io::{self, BufRead, Write};

use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use log::debug;

use crate::error::{Error, Result};

/// Printed when an answer is not one of the accepted keys
pub const INVALID_INPUT: &str = "Invalid input.  Please try again.";

/// Source of operator answers.
pub trait Prompter {
    /// Ask until one of `allowed` is entered; returns it upper-cased.
    ///
    /// Fails with [`Error::Input`] when no answer can be read.
    fn keypress(&mut self, prompt: &str, allowed: &[char]) -> Result<char>;

    /// Wait for the operator between pages. Returns `false` to stop.
    fn pause(&mut self, prompt: &str) -> Result<bool>;
}

/// Match a line of input against the accepted keys, ignoring case.
pub fn parse_key(input: &str, allowed: &[char]) -> Option<char> {
    let mut chars = input.trim().chars();
    let key = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    allowed
        .iter()
        .any(|a| a.eq_ignore_ascii_case(&key))
        .then_some(key)
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

/// Prompts on a line-oriented reader and writer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::Input(e.to_string()))?;
        Ok((read > 0).then_some(line))
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter reading standard input and writing standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn keypress(&mut self, prompt: &str, allowed: &[char]) -> Result<char> {
        loop {
            write!(self.output, "{}: ", prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Err(Error::Input("no answer received (end of input)".to_string()));
            };
            if let Some(key) = parse_key(&line, allowed) {
                return Ok(key);
            }
            writeln!(self.output, "{}", INVALID_INPUT)?;
        }
    }

    fn pause(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        match self.read_line() {
            Ok(Some(line)) => Ok(!is_quit(&line)),
            Ok(None) => {
                writeln!(self.output)?;
                Ok(true)
            }
            Err(e) => {
                debug!("Ignoring unreadable answer at page break: {}", e);
                Ok(true)
            }
        }
    }
}

/// Prompts on an interactive terminal using dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn keypress(&mut self, prompt: &str, allowed: &[char]) -> Result<char> {
        let keys = allowed.to_vec();
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .validate_with(move |input: &String| -> std::result::Result<(), &'static str> {
                parse_key(input, &keys).map(|_| ()).ok_or(INVALID_INPUT)
            })
            .interact_text()?;

        parse_key(&answer, allowed).ok_or_else(|| Error::Input(INVALID_INPUT.to_string()))
    }

    fn pause(&mut self, prompt: &str) -> Result<bool> {
        let answer = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(!is_quit(&answer)),
            Err(e) => {
                debug!("Ignoring unreadable answer at page break: {}", e);
                Ok(true)
            }
        }
    }
}
