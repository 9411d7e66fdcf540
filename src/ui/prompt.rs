//! The seam between handlers and the terminal. Everything interactive goes
//! through the [`Prompter`] trait so menu resolution and the application loop
//! can be exercised in tests with a scripted implementation instead of a live
//! terminal.

use anyhow::{Context, Result};
use console::Term;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use dialoguer::{Input, Select};

use super::banner::Banner;

/// Blocking terminal interactions needed by the menus and handlers. Every
/// method suspends the caller until the operator responds; there are no
/// timeouts and no cancellation.
pub trait Prompter {
    /// Clear the screen and print the ASCII-art banner for a section title.
    fn banner(&mut self, title: &str) -> Result<()>;
    /// Present a single-select list and return the chosen index.
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize>;
    /// Ask for one line of free text.
    fn input(&mut self, message: &str) -> Result<String>;
    /// Wait for a keypress so the operator can read what is on screen.
    fn pause(&mut self) -> Result<()>;
    /// Print a line of output.
    fn show(&mut self, text: &str);
}

/// Production implementation backed by `dialoguer` plus a raw-mode keypress
/// wait from `crossterm`.
pub struct TerminalPrompter {
    term: Term,
    banner: Banner,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            banner: Banner::new()?,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn banner(&mut self, title: &str) -> Result<()> {
        self.term
            .clear_screen()
            .context("failed to clear the terminal")?;
        println!("{}", self.banner.render(title));
        Ok(())
    }

    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        let index = Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .context("failed to read a menu selection")?;
        Ok(index)
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(message)
            .interact_text()
            .context("failed to read input")?;
        Ok(value)
    }

    fn pause(&mut self) -> Result<()> {
        println!("\n(press any key to continue)");
        enable_raw_mode().context("failed to enable raw mode")?;
        let result = wait_for_keypress();
        disable_raw_mode().context("failed to disable raw mode")?;
        result
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Block until a key is pressed. Release and repeat events are skipped so a
/// held key from the previous prompt does not fall through.
fn wait_for_keypress() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("failed to read a key event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Scripted prompter used by the menu and application-loop tests. Selections
/// and inputs are consumed front to back; output is captured in `shown`.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    selections: std::collections::VecDeque<usize>,
    inputs: std::collections::VecDeque<String>,
    pub(crate) shown: Vec<String>,
    pub(crate) select_calls: usize,
    pub(crate) pause_calls: usize,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub(crate) fn new(selections: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selections: selections.into_iter().collect(),
            inputs: std::collections::VecDeque::new(),
            shown: Vec::new(),
            select_calls: 0,
            pause_calls: 0,
        }
    }

    pub(crate) fn with_inputs(mut self, inputs: impl IntoIterator<Item = String>) -> Self {
        self.inputs = inputs.into_iter().collect();
        self
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn banner(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn select(&mut self, _message: &str, items: &[String]) -> Result<usize> {
        self.select_calls += 1;
        let index = self
            .selections
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("selection script exhausted"))?;
        anyhow::ensure!(index < items.len(), "scripted index {index} out of range");
        Ok(index)
    }

    fn input(&mut self, _message: &str) -> Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("input script exhausted"))
    }

    fn pause(&mut self) -> Result<()> {
        self.pause_calls += 1;
        Ok(())
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}
