//! Export layer — writes [`DayRecord`] values as CSV, JSON lines or a text table.
//!
//! Column order everywhere is `date, condition, high_temp, low_temp,
//! wind_direction, wind_speed, rain_chance`. A missing high is an empty CSV
//! field, `null` in JSON and `--` in the text table.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::DayRecord;

/// CSV header, matching the serde field names of [`DayRecord`].
pub const COLUMNS: [&str; 7] = [
    "date",
    "condition",
    "high_temp",
    "low_temp",
    "wind_direction",
    "wind_speed",
    "rain_chance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Jsonl,
    Table,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Table => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Jsonl => write!(f, "jsonl"),
            ExportFormat::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" | "json" | "ndjson" => Ok(ExportFormat::Jsonl),
            "table" | "txt" | "text" => Ok(ExportFormat::Table),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Write `records` to `out` in `format`.
pub fn write_records<W: Write>(records: &[DayRecord], format: ExportFormat, out: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(records, out),
        ExportFormat::Jsonl => write_jsonl(records, out),
        ExportFormat::Table => write_table(records, out),
    }
}

/// Render `records` into a `String`.
pub fn render(records: &[DayRecord], format: ExportFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_records(records, format, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `records` to a file at `path`, creating parent directories.
pub fn export_to_path(records: &[DayRecord], format: ExportFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    write_records(records, format, file)?;
    tracing::info!(path = %path.display(), records = records.len(), %format, "exported forecast");
    Ok(())
}

/// Expand a file name template. `{zip}` becomes the ZIP code and `{date}` the
/// date as `MMDDYYYY`; the format's extension is appended.
///
/// ```
/// use chrono::NaiveDate;
/// use tenday_core::export::{export_file_name, ExportFormat};
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert_eq!(
///     export_file_name("weather_{zip}_{date}", "02134", date, ExportFormat::Csv),
///     "weather_02134_10162026.csv"
/// );
/// ```
pub fn export_file_name(template: &str, zip: &str, date: NaiveDate, format: ExportFormat) -> String {
    let stem = template
        .replace("{zip}", zip)
        .replace("{date}", &date.format("%m%d%Y").to_string());
    format!("{stem}.{}", format.extension())
}

fn write_csv<W: Write>(records: &[DayRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if records.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_jsonl<W: Write>(records: &[DayRecord], mut out: W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(records: &[DayRecord], mut out: W) -> Result<()> {
    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| {
            [
                r.date_label.clone(),
                r.condition.to_string(),
                r.high_temp.map_or_else(|| "--".to_string(), |h| h.to_string()),
                r.low_temp.to_string(),
                r.wind_direction.to_string(),
                r.wind_speed.to_string(),
                r.rain_chance.to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    write_row(&mut out, &header, &widths)?;
    for row in &rows {
        write_row(&mut out, row, &widths)?;
    }
    out.flush()?;
    Ok(())
}

/// Text columns left-aligned, numeric columns (index 2..) right-aligned.
fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize; 7]) -> Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        if i < 2 || i == 4 {
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad));
        } else {
            line.extend(std::iter::repeat(' ').take(pad));
            line.push_str(cell);
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
