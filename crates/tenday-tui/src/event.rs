//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `NextView`                 |
//! | `Shift+Tab`             | `PrevView`                 |
//! | `↑` / `k`               | `Move(Up)`                 |
//! | `↓` / `j`               | `Move(Down)`               |
//! | `←` / `h`               | `Move(Left)`               |
//! | `→` / `l`               | `Move(Right)`              |
//! | `PageUp`, `Ctrl+u`      | `PageUp`                   |
//! | `PageDown`, `Ctrl+d`    | `PageDown`                 |
//! | `g`                     | `First`                    |
//! | `G`                     | `Last`                     |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! `?` and `:` arrive as `Char` and are interpreted by the app shell.
//!
//! ## Insert mode
//!
//! While the command bar is open the event loop calls
//! [`to_app_event_insert`] instead: every printable character is forwarded as
//! `Char`, arrows still produce `Move` so `←`/`→` move the text cursor, and
//! only `Ctrl+c`, `Escape`, `Enter` and `Backspace` keep their special
//! bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Switch to the next view in the tab bar.
    NextView,
    /// Switch to the previous view in the tab bar.
    PrevView,
    /// Move the selection (or the text cursor in insert mode).
    Move(Direction),
    PageUp,
    PageDown,
    /// Jump to the first row.
    First,
    /// Jump to the last row.
    Last,
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    Enter,
    Escape,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::NextView),
        BackTab => Some(AppEvent::PrevView),

        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageDown),

        Home => Some(AppEvent::First),
        End => Some(AppEvent::Last),
        Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::First),
        // uppercase, so SHIFT may or may not be set depending on the terminal
        Char('G') => Some(AppEvent::Last),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Move(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Move(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Move(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => {
            Some(AppEvent::Move(Direction::Right))
        }

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Move(Direction::Up)),
        Down => Some(AppEvent::Move(Direction::Down)),
        Left => Some(AppEvent::Move(Direction::Left)),
        Right => Some(AppEvent::Move(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
