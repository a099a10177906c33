//! Forecast table — one row per parsed day record.
//!
//! Conditions are coloured by sky category, and rows whose low exceeds the
//! high are highlighted so upstream data errors stand out.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Cell, Row, Table, Widget},
};
use tenday_core::DayRecord;

use crate::theme::Theme;
use crate::widgets::scroll::ScrollState;

const HEADERS: [&str; 6] = ["Date", "Condition", "High", "Low", "Wind", "Rain"];

pub struct ForecastTable<'a> {
    records: &'a [DayRecord],
    state: &'a ScrollState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ForecastTable<'a> {
    pub fn new(
        records: &'a [DayRecord],
        state: &'a ScrollState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { records, state, focused, theme }
    }
}

impl Widget for ForecastTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(format!(" Forecast ({} days) ", self.records.len()))
            .border_style(border_style);

        if self.records.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            buf.set_string(inner.x + 1, inner.y, "no forecast records", self.theme.status);
            return;
        }

        // header row takes one line of the inner area
        let body_height = block.inner(area).height.saturating_sub(1) as usize;
        let (start, end) = self.state.viewport(body_height);

        let rows: Vec<Row> = self.records[start..end]
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let row = record_row(rec, self.theme);
                if start + i == self.state.cursor {
                    row.style(self.theme.selection)
                } else if rec.is_inverted() {
                    row.style(self.theme.temp_inverted)
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(self.theme.header);

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(24),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(14),
                Constraint::Length(5),
            ],
        )
        .header(header)
        .column_spacing(2)
        .block(block)
        .render(area, buf);
    }
}

fn record_row<'a>(rec: &'a DayRecord, theme: &Theme) -> Row<'a> {
    let high = rec
        .high_temp
        .map_or_else(|| "--".to_string(), |t| format!("{t}°"));

    Row::new([
        Cell::from(rec.date_label.as_str()),
        Cell::from(Span::styled(rec.condition.as_str(), theme.sky_style(rec.condition.sky()))),
        Cell::from(Line::styled(high, theme.temp_high).right_aligned()),
        Cell::from(Line::styled(format!("{}°", rec.low_temp), theme.temp_low).right_aligned()),
        Cell::from(wind_text(rec)),
        Cell::from(Line::styled(format!("{}%", rec.rain_chance), Style::default()).right_aligned()),
    ])
}

/// `↙ NNE 12 mph`. The arrow points the way the wind blows.
pub fn wind_text(rec: &DayRecord) -> String {
    format!(
        "{} {:<3} {:>2} mph",
        rec.wind_direction.arrow(),
        rec.wind_direction.as_str(),
        rec.wind_speed
    )
}
