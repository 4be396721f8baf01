#![cfg(feature = "std")]

//! Line-oriented terminal access used by the game loop.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Input/output collaborator passed to the game loop.
pub trait Console {
    /// Show `prompt` and block for one line of input, without its line ending.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Write `text` as-is.
    fn display(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Console backed by the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.display(prompt)?;
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn display(&mut self, text: &str) -> anyhow::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Console that replays queued input lines and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
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

    /// Everything displayed so far, prompts included.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not consumed yet.
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(line) => Ok(line),
            None => anyhow::bail!("scripted input exhausted"),
        }
    }

    fn display(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}
