//! Console Page
//!
//! Line-oriented renderer for terminals: draws the form snapshot as text and
//! reads edits and activations from input lines.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::features::dynamic_form::FormController;
use crate::i18n::{Locale, t, t_format};
use crate::state::{FormSnapshot, SnapshotEntry};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit { label: String, value: String },
    Activate { title: String },
    Show,
    History,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse an input line; surrounding whitespace is ignored except in values
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return None;
        }

        let command = match trimmed {
            ":show" | ":s" => Command::Show,
            ":history" | ":h" => Command::History,
            ":reset" | ":r" => Command::Reset,
            ":help" | ":?" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ if trimmed.starts_with(':') => Command::Unknown(trimmed.to_string()),
            _ => {
                if let Some(title) = trimmed.strip_prefix('!') {
                    Command::Activate {
                        title: title.trim().to_string(),
                    }
                } else if let Some((label, value)) = trimmed.split_once('=') {
                    Command::Edit {
                        label: label.trim().to_string(),
                        value: value.to_string(),
                    }
                } else {
                    Command::Unknown(trimmed.to_string())
                }
            }
        };
        Some(command)
    }
}

/// Draw a snapshot, one line per entry
pub fn render(snapshot: &FormSnapshot, locale: Locale, out: &mut impl Write) -> Result<()> {
    for entry in &snapshot.entries {
        match entry {
            SnapshotEntry::Text(text) => {
                let marker = if text.invalid { "!" } else { " " };
                writeln!(out, "{marker} [{}] {}", text.label, text.value)?;
                if let Some(error) = &text.error {
                    writeln!(out, "      {error}")?;
                }
            }
            SnapshotEntry::Button(button) => {
                let state = if button.enabled {
                    t(locale, "console.enabled")
                } else {
                    t(locale, "console.disabled")
                };
                writeln!(out, "  ({}) {state}", button.title)?;
            }
        }
    }
    Ok(())
}

/// Run an interactive session until `:quit` or end of input
pub fn run(
    controller: &mut FormController,
    title: &str,
    locale: Locale,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", t(locale, "console.help"))?;
    render(&controller.snapshot(), locale, &mut out)?;

    for line in input.lines() {
        let Some(command) = Command::parse(&line?) else {
            continue;
        };

        let outcome = match command {
            Command::Edit { label, value } => controller.edit(&label, value).map(|_| true),
            Command::Activate { title } => controller.activate(&title).map(|_| false),
            Command::Show => Ok(true),
            Command::History => {
                if controller.history().is_empty() {
                    writeln!(out, "{}", t(locale, "console.history_empty"))?;
                }
                for record in controller.history().iter() {
                    writeln!(
                        out,
                        "#{} {} {}",
                        record.id,
                        record.timestamp.format("%H:%M:%S"),
                        record.title
                    )?;
                }
                Ok(false)
            }
            Command::Reset => {
                controller.reset();
                Ok(true)
            }
            Command::Help => {
                writeln!(out, "{}", t(locale, "console.help"))?;
                Ok(false)
            }
            Command::Quit => break,
            Command::Unknown(command) => {
                let message =
                    t_format(locale, "console.unknown_command", &[("command", command.as_str())]);
                writeln!(out, "{message}")?;
                Ok(false)
            }
        };

        match outcome {
            Ok(true) => render(&controller.snapshot(), locale, &mut out)?,
            Ok(false) => {}
            Err(error) => writeln!(out, "error: {error}")?,
        }
    }

    out.flush()?;
    Ok(())
}
