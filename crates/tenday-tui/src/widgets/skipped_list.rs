//! Skipped-line diagnostics — each dropped forecast line with the fields it
//! was missing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use tenday_core::SkippedLine;

use crate::theme::Theme;
use crate::widgets::scroll::ScrollState;

pub struct SkippedList<'a> {
    skipped: &'a [SkippedLine],
    lines_seen: usize,
    state: &'a ScrollState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SkippedList<'a> {
    pub fn new(
        skipped: &'a [SkippedLine],
        lines_seen: usize,
        state: &'a ScrollState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { skipped, lines_seen, state, focused, theme }
    }
}

impl Widget for SkippedList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(format!(
                " Skipped ({} of {} lines) ",
                self.skipped.len(),
                self.lines_seen
            ))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.skipped.is_empty() {
            buf.set_string(inner.x + 1, inner.y, "every line parsed", self.theme.status);
            return;
        }

        let (start, end) = self.state.viewport(inner.height as usize);
        let lines: Vec<Line> = self.skipped[start..end]
            .iter()
            .enumerate()
            .map(|(row, s)| {
                let line = skipped_line(s, self.theme);
                if start + row == self.state.cursor {
                    line.patch_style(self.theme.selection)
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn skipped_line<'a>(s: &'a SkippedLine, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("#{:<3} ", s.index + 1),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Span::styled(format!("{:<28}", s.rejection.to_string()), theme.error),
        Span::styled("│ ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw(s.line.as_str()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenday_core::{Field, Rejection};

    #[test]
    fn lists_line_number_and_missing_fields() {
        let skipped = vec![SkippedLine {
            index: 1,
            line: "Garbled nonsense".to_string(),
            rejection: Rejection {
                missing: vec![Field::Date, Field::Condition, Field::Temperature, Field::Wind],
            },
        }];
        let state = ScrollState::new(1);
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);

        SkippedList::new(&skipped, 3, &state, true, &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Skipped (1 of 3 lines)"));
        assert!(text.contains("#2"));
        assert!(text.contains("missing date"));
        assert!(text.contains("Garbled nonsense"));
    }
}
