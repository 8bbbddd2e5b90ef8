use std::io::Write;

use crossterm::{cursor, terminal, QueueableCommand};
use dialoguer::{theme::ColorfulTheme, Completion, Confirm, Input};

use crate::error::Result;

/// Everything the review loop needs from a terminal.
pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;

    /// Replace the most recently printed line.
    fn overwrite_line(&mut self, line: &str) -> Result<()>;

    /// Ask a yes/no question; an empty answer means no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Read one line, optionally pre-filled and with tab-completion.
    fn input(
        &mut self,
        prompt: &str,
        initial: Option<&str>,
        completer: Option<&CategoryCompleter>,
    ) -> Result<String>;
}

/// Tab-completion over known category names.
pub struct CategoryCompleter {
    options: Vec<String>,
}

impl CategoryCompleter {
    pub fn new<'a>(options: impl IntoIterator<Item = &'a str>) -> Self {
        let mut options: Vec<String> = options
            .into_iter()
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        options.sort();
        options.dedup();
        Self { options }
    }

    pub fn complete(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return self.options.first().cloned();
        }
        let candidates: Vec<&String> = self
            .options
            .iter()
            .filter(|o| o.starts_with(input))
            .collect();
        let first = *candidates.first()?;
        let prefix = candidates.iter().fold(first.as_str(), |prefix, candidate| {
            common_prefix(prefix, candidate)
        });
        if prefix.len() > input.len() {
            Some(prefix.to_string())
        } else {
            Some(first.clone())
        }
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

impl Completion for CategoryCompleter {
    fn get(&self, input: &str) -> Option<String> {
        self.complete(input)
    }
}

/// Interactive console on stdin/stdout.
pub struct DialoguerConsole {
    theme: ColorfulTheme,
}

impl DialoguerConsole {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Console for DialoguerConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }

    fn overwrite_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout
            .queue(cursor::MoveToPreviousLine(1))?
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        stdout.flush()?;
        println!("{line}");
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .report(false)
            .interact()?)
    }

    fn input(
        &mut self,
        prompt: &str,
        initial: Option<&str>,
        completer: Option<&CategoryCompleter>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false);
        if let Some(text) = initial {
            input = input.with_initial_text(text);
        }
        if let Some(completer) = completer {
            input = input.completion_with(completer);
        }
        Ok(input.interact_text()?)
    }
}

#[cfg(test)]
pub use scripted::{Answer, ScriptedConsole};
