// Console seam: everything the navigator needs from a terminal.
//
// `TerminalConsole` is the real implementation built on `dialoguer` for
// prompts and `crossterm` for clearing and raw keypresses.
// `ScriptedConsole` replays a queue of answers and records output, so menu
// flows can be exercised without a terminal.

use crate::files::{FileName, InvalidFileName};
use anyhow::{anyhow, bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor::MoveTo, execute};
use dialoguer::{Input, Select};
use std::collections::VecDeque;
use std::io::{self, Write};

pub trait Console {
    /// Clear the screen before a menu is drawn.
    fn clear(&mut self) -> Result<()>;

    fn println(&mut self, line: &str) -> Result<()>;

    /// Keyboard-driven selection; returns the index into `items`.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Ask for a filename, re-prompting until it is non-empty.
    fn filename(&mut self, prompt: &str) -> Result<FileName>;

    /// Free text; empty input is allowed.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask for a number, re-prompting until the input parses.
    fn number(&mut self, prompt: &str) -> Result<f64>;

    /// Block until a single key is pressed. The key is not interpreted.
    fn wait_for_key(&mut self) -> Result<()>;
}

/// Console backed by the process's terminal.
pub struct TerminalConsole {
    out: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole { out: io::stdout() }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw mode is held only for the lifetime of this guard.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        // `Select` shows a keyboard-navigable list; arrow keys + Enter.
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(selection)
    }

    fn filename(&mut self, prompt: &str) -> Result<FileName> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), InvalidFileName> {
                FileName::new(input.as_str()).map(|_| ())
            })
            .interact_text()?;
        Ok(FileName::new(raw)?)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        let text: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn number(&mut self, prompt: &str) -> Result<f64> {
        // `Input<f64>` re-prompts on anything that does not parse.
        let value: f64 = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value)
    }

    fn wait_for_key(&mut self) -> Result<()> {
        self.out.flush()?;
        let _raw = RawModeGuard::acquire()?;
        loop {
            // Windows reports both press and release; only count the press.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// One canned answer for a `ScriptedConsole` prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Choice by label; must match one of the offered items exactly.
    Select(String),
    Text(String),
    Number(f64),
    Key,
}

/// Console that answers prompts from a script and captures output lines.
///
/// Prompts are validated the same way the terminal does it: an empty
/// filename is rejected and the next scripted answer is consumed instead.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<Answer>,
    output: Vec<String>,
    prompts: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        ScriptedConsole {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Lines printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompt texts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at prompt '{}'", prompt))
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn println(&mut self, line: &str) -> Result<()> {
        // Multi-line writes are stored one line per entry.
        self.output.extend(line.split('\n').map(str::to_string));
        Ok(())
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Select(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| anyhow!("'{}' is not offered at '{}': {:?}", label, prompt, items)),
            other => bail!("expected a selection at '{}', got {:?}", prompt, other),
        }
    }

    fn filename(&mut self, prompt: &str) -> Result<FileName> {
        loop {
            match self.next(prompt)? {
                Answer::Text(text) => match FileName::new(text) {
                    Ok(name) => return Ok(name),
                    Err(e) => self.output.push(e.to_string()),
                },
                other => bail!("expected text at '{}', got {:?}", prompt, other),
            }
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => bail!("expected text at '{}', got {:?}", prompt, other),
        }
    }

    fn number(&mut self, prompt: &str) -> Result<f64> {
        match self.next(prompt)? {
            Answer::Number(n) => Ok(n),
            other => bail!("expected a number at '{}', got {:?}", prompt, other),
        }
    }

    fn wait_for_key(&mut self) -> Result<()> {
        match self.next("<key>")? {
            Answer::Key => Ok(()),
            other => bail!("expected a keypress, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_label() {
        let mut console = ScriptedConsole::new([Answer::Select("b".into())]);
        assert_eq!(console.select("Pick:", &["a", "b", "c"]).unwrap(), 1);
        assert_eq!(console.prompts(), ["Pick:"]);
    }

    #[test]
    fn test_select_unknown_label_errors() {
        let mut console = ScriptedConsole::new([Answer::Select("z".into())]);
        assert!(console.select("Pick:", &["a"]).is_err());
    }

    #[test]
    fn test_empty_filename_reprompts() {
        let mut console = ScriptedConsole::new([
            Answer::Text(String::new()),
            Answer::Text("ok.txt".into()),
        ]);
        let name = console.filename("Enter filename:").unwrap();
        assert_eq!(name.as_str(), "ok.txt");
        assert_eq!(console.prompts().len(), 2);
        assert_eq!(console.output(), ["Filename cannot be empty"]);
    }

    #[test]
    fn test_exhausted_script_errors() {
        let mut console = ScriptedConsole::default();
        assert!(console.wait_for_key().is_err());
    }

    #[test]
    fn test_println_splits_lines() {
        let mut console = ScriptedConsole::default();
        console.println("one\ntwo").unwrap();
        assert_eq!(console.output(), ["one", "two"]);
    }

    #[test]
    fn test_wrong_answer_kind_errors() {
        let mut console = ScriptedConsole::new([Answer::Key]);
        assert!(console.number("Enter first number:").is_err());
    }
}
