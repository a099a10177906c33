//! `:` commands — parsing and execution against the app state.

use std::path::PathBuf;

use crate::app::{AppState, View};
use crate::theme::{Theme, THEME_NAMES};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    View(View),
    /// Write the records; `None` uses the default export path.
    Export(Option<PathBuf>),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "theme" => {
                if rest.is_empty() {
                    Err(format!("usage: theme <{}>", THEME_NAMES.join("|")))
                } else if Theme::by_name(rest).is_none() {
                    Err(format!("unknown theme: {rest}"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "view" => match View::from_name(rest) {
                Some(view) => Ok(Command::View(view)),
                None => Err("usage: view <forecast|chart|skipped>".to_string()),
            },
            "export" | "w" => Ok(Command::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            if let Some(theme) = Theme::by_name(&name) {
                s.theme = theme;
                s.status = Some(format!("theme: {name}"));
            }
        }
        Command::View(view) => s.select_view(view),
        Command::Export(path) => {
            let path = path.unwrap_or_else(|| s.export_path.clone());
            s.status = Some(match export(s, &path) {
                Ok(()) => format!("Forecast data stored to {}", path.display()),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "export failed");
                    format!("export failed: {err}")
                }
            });
        }
    }
}

fn export(s: &AppState, path: &std::path::Path) -> tenday_core::Result<()> {
    let format = s.config.export.format()?;
    tenday_core::export::export_to_path(&s.batch.records, format, path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
