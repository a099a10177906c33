//! Tab bar widget — the strip of views at the top of the screen.

use crate::app::View;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of views. Keybinding hints (`q:quit  ?:help`)
/// are right-aligned in the same row.
pub struct TabBar<'a> {
    views: &'a [View],
    active: View,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(views: &'a [View], active: View, theme: &'a Theme) -> Self {
        Self { views, active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .views
            .iter()
            .enumerate()
            .map(|(i, view)| Line::from(format!(" {}:{} ", i + 1, view.label())))
            .collect();
        let selected = self.views.iter().position(|v| *v == self.active);

        Tabs::new(labels)
            .select(selected)
            .highlight_style(self.theme.active_tab)
            .divider("")
            .render(area, buf);

        let hint = " Tab:view  :cmd  q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
