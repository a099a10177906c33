//! Temperature chart — high and low lines across the forecast periods.
//!
//! The x axis is the record index; records without a high (night periods
//! shown as `--/54°`) are left out of the high series rather than drawn at
//! zero. The y axis spans the forecast's temperatures unless `[ui] chart_min`
//! or `chart_max` pins an end.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};
use tenday_core::DayRecord;

use crate::theme::Theme;

pub struct TempChart<'a> {
    records: &'a [DayRecord],
    bounds: [f64; 2],
    focused: bool,
    theme: &'a Theme,
}

/// Degrees of headroom above and below the data.
const PADDING: i32 = 5;
/// Axis used when there is nothing to scale to.
const EMPTY_BOUNDS: (i32, i32) = (0, 100);

impl<'a> TempChart<'a> {
    pub fn new(
        records: &'a [DayRecord],
        min: Option<i32>,
        max: Option<i32>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            records,
            bounds: y_bounds(records, min, max),
            focused,
            theme,
        }
    }
}

/// The padded range of every high and low in `records`, with either end
/// replaced by an override. Always ordered and at least one degree wide.
pub fn y_bounds(records: &[DayRecord], min: Option<i32>, max: Option<i32>) -> [f64; 2] {
    let (data_lo, data_hi) = records
        .iter()
        .flat_map(|r| r.high_temp.into_iter().chain([r.low_temp]))
        .fold(None, |range, t| match range {
            None => Some((t, t)),
            Some((lo, hi)) => Some((t.min(lo), t.max(hi))),
        })
        .map_or(EMPTY_BOUNDS, |(lo, hi)| (lo - PADDING, hi + PADDING));

    let lo = min.unwrap_or(data_lo);
    let hi = max.unwrap_or(data_hi);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    [f64::from(lo), f64::from(hi.max(lo + 1))]
}

/// `(x, temperature)` points for the high series.
pub fn high_points(records: &[DayRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.high_temp.map(|t| (i as f64, f64::from(t))))
        .collect()
}

/// `(x, temperature)` points for the low series.
pub fn low_points(records: &[DayRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, f64::from(r.low_temp)))
        .collect()
}

impl Widget for TempChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(" Temperature °F ")
            .border_style(border_style);

        let highs = high_points(self.records);
        let lows = low_points(self.records);

        let datasets = vec![
            Dataset::default()
                .name("High")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(self.theme.temp_high)
                .data(&highs),
            Dataset::default()
                .name("Low")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(self.theme.temp_low)
                .data(&lows),
        ];

        let last = self.records.len().saturating_sub(1);
        let x_labels: Vec<Line> = match self.records {
            [] => vec![],
            [only] => vec![Line::from(only.date_label.as_str())],
            [first, .., final_] => {
                let mid = &self.records[last / 2];
                vec![
                    Line::from(first.date_label.as_str()),
                    Line::from(mid.date_label.as_str()),
                    Line::from(final_.date_label.as_str()),
                ]
            }
        };

        let [lo, hi] = self.bounds;
        let y_labels = vec![
            Span::raw(format!("{lo:.0}")),
            Span::raw(format!("{:.0}", (lo + hi) / 2.0)),
            Span::raw(format!("{hi:.0}")),
        ];

        Chart::new(datasets)
            .block(block)
            .legend_position(Some(LegendPosition::TopRight))
            .x_axis(
                Axis::default()
                    .style(self.theme.status)
                    .bounds([0.0, last.max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(self.theme.status)
                    .bounds(self.bounds)
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}
