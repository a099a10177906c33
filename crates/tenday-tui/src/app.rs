//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        forecast_table::ForecastTable,
        help::HelpPopup,
        scroll::ScrollState,
        skipped_list::SkippedList,
        tab_bar::TabBar,
        temp_chart::TempChart,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::Line,
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};
use tenday_core::{config::Config, NormalizedBatch};

// ---------------------------------------------------------------------------
// Focus + view types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    View,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Forecast,
    Chart,
    Skipped,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Forecast => "forecast",
            View::Chart => "chart",
            View::Skipped => "skipped",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        match name.to_ascii_lowercase().as_str() {
            "forecast" | "table" => Some(View::Forecast),
            "chart" | "plot" => Some(View::Chart),
            "skipped" => Some(View::Skipped),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub batch: NormalizedBatch,
    /// Views shown in the tab bar, in cycling order.
    pub views: Vec<View>,
    pub view: View,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    /// Destination of a bare `:export`.
    pub export_path: PathBuf,
    pub forecast: ScrollState,
    pub skipped: ScrollState,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// One-shot message shown in the status line until the next key.
    pub status: Option<String>,
    pub quit: bool,
}

impl AppState {
    pub fn select_view(&mut self, view: View) {
        if self.views.contains(&view) {
            tracing::debug!(from = ?self.view, to = ?view, "view switch");
            self.view = view;
        } else {
            self.status = Some(format!("{} view is disabled", view.label()));
        }
    }

    fn cycle_view(&mut self, forward: bool) {
        let n = self.views.len();
        let idx = self.views.iter().position(|v| *v == self.view).unwrap_or(0);
        let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
        self.select_view(self.views[next]);
    }

    fn summary_line(&self) -> String {
        let b = &self.batch;
        let mut line = format!(
            " {} records · {} skipped",
            b.records.len(),
            b.skipped.len()
        );
        if b.inverted > 0 {
            line.push_str(&format!(" · {} inverted ranges", b.inverted));
        }
        line.push_str(&format!(" · :export → {}", self.export_path.display()));
        line
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(batch: NormalizedBatch, config: Config, theme: Theme, export_path: PathBuf) -> Self {
        let mut views = vec![View::Forecast, View::Chart];
        if config.ui.show_skipped {
            views.push(View::Skipped);
        }

        let state = AppState {
            forecast: ScrollState::new(batch.records.len()),
            skipped: ScrollState::new(batch.skipped.len()),
            batch,
            views,
            view: View::Forecast,
            focus: Focus::View,
            theme,
            config,
            export_path,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if self.state.focus == Focus::Command {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Quit => s.quit = true,
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = Focus::View;
                }
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        s.command_bar.clear();
                        s.focus = Focus::View;
                        execute_command(s, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        s.command_bar.clear();
                        s.focus = Focus::View;
                    }
                    Err(msg) => {
                        // bar stays open showing the error
                        s.command_bar.error = Some(msg);
                    }
                },
                other => s.command_bar.handle(&other),
            }
            return;
        }

        s.status = None;

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                s.command_bar.clear();
                s.focus = Focus::Command;
            }
            AppEvent::NextView | AppEvent::Move(Direction::Right) => s.cycle_view(true),
            AppEvent::PrevView | AppEvent::Move(Direction::Left) => s.cycle_view(false),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.view {
                View::Forecast => s.forecast.handle(&other),
                View::Skipped => s.skipped.handle(&other),
                View::Chart => {}
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | body | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(TabBar::new(&state.views, state.view, &state.theme), vert[0]);

    let focused = state.focus == Focus::View;
    let batch = &state.batch;
    match state.view {
        View::Forecast => frame.render_widget(
            ForecastTable::new(&batch.records, &state.forecast, focused, &state.theme),
            vert[1],
        ),
        View::Chart => frame.render_widget(
            TempChart::new(
                &batch.records,
                state.config.ui.chart_min,
                state.config.ui.chart_max,
                focused,
                &state.theme,
            ),
            vert[1],
        ),
        View::Skipped => frame.render_widget(
            SkippedList::new(
                &batch.skipped,
                batch.lines_seen(),
                &state.skipped,
                focused,
                &state.theme,
            ),
            vert[1],
        ),
    }

    if state.focus == Focus::Command {
        // Command bar overlays the status row
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    } else {
        let status = state
            .status
            .as_ref()
            .map(|s| format!(" {s}"))
            .unwrap_or_else(|| state.summary_line());
        frame.render_widget(Line::styled(status, state.theme.status), vert[2]);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
