//! Vim-style command bar — a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:`. Displays a `:` prefix followed by the typed
//! command. Pressing `Enter` parses and executes the command; `Escape`
//! cancels. See [`crate::commands::Command`] for the command set.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Apply an editing key. `Enter` and `Escape` are handled by the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        // Any keypress dismisses the error display so the user can edit again.
        self.error = None;

        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Move(Direction::Left) => {
                self.cursor = self.prev_boundary();
            }
            AppEvent::Move(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                }
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input[..self.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay. The caller passes a 1-row `Rect` at the
/// bottom of the terminal.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.error))
        } else {
            Line::from(vec![
                Span::styled(":", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.as_str()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> CommandBarState {
        let mut state = CommandBarState::default();
        for c in s.chars() {
            state.handle(&AppEvent::Char(c));
        }
        state
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut s = typed("foo");
        assert_eq!(s.input, "foo");
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "fo");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = typed("a°b");
        s.handle(&AppEvent::Move(Direction::Left));
        s.handle(&AppEvent::Move(Direction::Left));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Move(Direction::Right));
        assert_eq!(s.cursor, 1 + '°'.len_utf8());
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.input, "a°xb");
    }

    #[test]
    fn error_cleared_on_next_key() {
        let mut s = CommandBarState {
            error: Some("oops".to_string()),
            ..Default::default()
        };
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn cursor_column_accounts_for_prefix() {
        let s = typed("view");
        assert_eq!(s.cursor_col(Rect::new(0, 23, 80, 1)), 5);
    }
}
