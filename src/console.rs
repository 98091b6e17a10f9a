//! The console boundary the table talks through.
//!
//! The engine never touches stdin or stdout directly. [`StdConsole`]
//! drives a real terminal and [`ScriptedConsole`] replays canned input
//! and records everything shown, for tests and demos.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::time::Duration;

use crate::error::{ConsoleClosed, InvalidInput};

/// Line-oriented input and output.
pub trait Console {
    /// Shows `message` and returns the next line of input without its
    /// line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleClosed`] when no more input will arrive.
    fn prompt_line(&mut self, message: &str) -> Result<String, ConsoleClosed>;

    /// Shows a line of output.
    fn display_line(&mut self, line: &str);

    /// Waits for `duration`. Does nothing unless overridden.
    fn pause(&mut self, duration: Duration) {
        let _ = duration;
    }
}

/// Prompts until `parse` accepts the answer.
///
/// When `rejection` is set it is displayed after every refused token.
///
/// # Errors
///
/// Returns [`ConsoleClosed`] if input ends before a valid answer.
pub fn prompt_until<C, T, F>(
    console: &mut C,
    message: &str,
    rejection: Option<&str>,
    mut parse: F,
) -> Result<T, ConsoleClosed>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> Result<T, InvalidInput>,
{
    loop {
        let answer = console.prompt_line(message)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("rejected {answer:?} for {message:?}: {err}");
                if let Some(line) = rejection {
                    console.display_line(line);
                }
            }
        }
    }
}

/// A console backed by the process's stdin and stdout.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdConsole;

#[cfg(feature = "std")]
impl StdConsole {
    /// Creates a console over stdin and stdout.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(feature = "std")]
impl Console for StdConsole {
    fn prompt_line(&mut self, message: &str) -> Result<String, ConsoleClosed> {
        use std::io::{self, BufRead, Write};

        print!("{message}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => Err(ConsoleClosed),
            Ok(_) => Ok(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::warn!("failed to read from stdin: {err}");
                Err(ConsoleClosed)
            }
        }
    }

    fn display_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// A console that answers prompts from a fixed script and keeps a
/// transcript of everything shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    lines: Vec<String>,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    /// Creates a console that will answer with `inputs` in order, then
    /// report [`ConsoleClosed`].
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queues more answers.
    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    /// Returns every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns every displayed line so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns every pause requested so far.
    #[must_use]
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Returns the number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Returns how many displayed lines equal `line`.
    #[must_use]
    pub fn count_line(&self, line: &str) -> usize {
        self.lines.iter().filter(|shown| *shown == line).count()
    }

    /// Returns whether any displayed line contains `needle`.
    #[must_use]
    pub fn shows(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt_line(&mut self, message: &str) -> Result<String, ConsoleClosed> {
        self.prompts.push(message.to_string());
        self.inputs.pop_front().ok_or(ConsoleClosed)
    }

    fn display_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
