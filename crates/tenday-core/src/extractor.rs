//! Field extractor — turns one forecast line into a [`DayRecord`], or explains
//! why it could not.
//!
//! Each catalog matcher runs once against the whole line; only its first
//! match counts. A record is built only when the date, condition, temperature
//! and wind matchers all succeed. The rain matcher is optional and defaults to
//! zero.

use std::fmt;

use regex::Captures;

use crate::catalog::PatternCatalog;
use crate::error::{Error, Result};
use crate::types::DayRecord;

/// A required field the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Date,
    Condition,
    Temperature,
    Wind,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Date => write!(f, "date"),
            Field::Condition => write!(f, "condition"),
            Field::Temperature => write!(f, "temperature"),
            Field::Wind => write!(f, "wind"),
        }
    }
}

/// Why a line produced no record. `missing` is never empty and is ordered
/// date, condition, temperature, wind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub missing: Vec<Field>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Outcome of extracting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Record(DayRecord),
    Skipped(Rejection),
}

impl Extraction {
    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Extraction::Record(record) => Some(record),
            Extraction::Skipped(_) => None,
        }
    }
}

/// Extract a record from `line` using `catalog`.
///
/// Returns `Ok(Extraction::Skipped(_))` for lines that lack a required field;
/// `Err` only when the catalog itself is inconsistent.
pub fn extract(catalog: &PatternCatalog, line: &str) -> Result<Extraction> {
    let date = catalog.date.find(line);
    let condition = catalog.condition.captures(line);
    let temperature = catalog.temperature.captures(line);
    let wind = catalog.wind.captures(line);

    let (date, condition, temperature, wind) = match (date, condition, temperature, wind) {
        (Some(d), Some(c), Some(t), Some(w)) => (d, c, t, w),
        (d, c, t, w) => {
            let missing = [
                (Field::Date, d.is_none()),
                (Field::Condition, c.is_none()),
                (Field::Temperature, t.is_none()),
                (Field::Wind, w.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            return Ok(Extraction::Skipped(Rejection { missing }));
        }
    };

    let high_temp = match temperature.name("high") {
        Some(high) => Some(number("temperature", high.as_str())?),
        None => None,
    };
    let low_temp = number("temperature", group(&temperature, "temperature", "low")?)?;

    let wind_direction = group(&wind, "wind", "dir")?
        .parse()
        .map_err(|source| Error::UnknownToken {
            matcher: "wind",
            source,
        })?;
    let wind_speed = number("wind", group(&wind, "wind", "speed")?)?;

    let rain_chance = match catalog.rain.captures(line) {
        Some(rain) => number("rain", group(&rain, "rain", "pct")?)?,
        None => 0,
    };

    let condition = group(&condition, "condition", "phrase")?
        .parse()
        .map_err(|source| Error::UnknownToken {
            matcher: "condition",
            source,
        })?;

    let record = DayRecord {
        date_label: date.as_str().to_string(),
        condition,
        high_temp,
        low_temp,
        wind_direction,
        wind_speed,
        rain_chance,
    };
    tracing::trace!(line, ?record, "extracted forecast line");
    Ok(Extraction::Record(record))
}

/// Convenience form over the global catalog. Skipped lines and catalog
/// defects both yield `None`.
pub fn extract_line(line: &str) -> Option<DayRecord> {
    match extract(PatternCatalog::global(), line) {
        Ok(extraction) => extraction.into_record(),
        Err(err) => {
            tracing::error!(error = %err, "pattern catalog defect");
            debug_assert!(!err.is_catalog_defect(), "pattern catalog defect: {err}");
            None
        }
    }
}

fn group<'h>(caps: &Captures<'h>, matcher: &'static str, name: &'static str) -> Result<&'h str> {
    caps.name(name)
        .map(|m| m.as_str())
        .ok_or(Error::CatalogGroup {
            matcher,
            group: name,
        })
}

fn number<T: std::str::FromStr>(matcher: &'static str, text: &str) -> Result<T> {
    text.parse().map_err(|_| Error::CatalogNumber {
        matcher,
        text: text.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
