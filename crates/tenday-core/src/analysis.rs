//! Descriptive statistics over a batch of [`DayRecord`] values.
//!
//! Per numeric column: count, mean, sample standard deviation, min and max.
//! Across columns: a Pearson correlation matrix using pairwise-complete rows,
//! so a missing high only removes that day from pairs involving `high_temp`.

use std::fmt;

use crate::types::DayRecord;

/// The numeric columns of a [`DayRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    HighTemp,
    LowTemp,
    WindSpeed,
    RainChance,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::HighTemp,
        Column::LowTemp,
        Column::WindSpeed,
        Column::RainChance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::HighTemp => "high_temp",
            Column::LowTemp => "low_temp",
            Column::WindSpeed => "wind_speed",
            Column::RainChance => "rain_chance",
        }
    }

    fn value(self, record: &DayRecord) -> Option<f64> {
        match self {
            Column::HighTemp => record.high_temp.map(f64::from),
            Column::LowTemp => Some(f64::from(record.low_temp)),
            Column::WindSpeed => Some(f64::from(record.wind_speed)),
            Column::RainChance => Some(f64::from(record.rain_chance)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub columns: Vec<ColumnSummary>,
    /// `correlation[i][j]` between `Column::ALL[i]` and `Column::ALL[j]`.
    pub correlation: [[Option<f64>; 4]; 4],
}

impl Summary {
    pub fn of(records: &[DayRecord]) -> Self {
        let columns = Column::ALL
            .iter()
            .map(|&column| summarize(column, records))
            .collect();

        let mut correlation = [[None; 4]; 4];
        for (i, &a) in Column::ALL.iter().enumerate() {
            for (j, &b) in Column::ALL.iter().enumerate() {
                correlation[i][j] = pearson(records, a, b);
            }
        }

        Self { columns, correlation }
    }

    pub fn column(&self, column: Column) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }
}

fn summarize(column: Column, records: &[DayRecord]) -> ColumnSummary {
    let values: Vec<f64> = records.iter().filter_map(|r| column.value(r)).collect();
    let count = values.len();
    let mean = mean(&values);
    let std = mean.filter(|_| count > 1).map(|m| {
        let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });
    ColumnSummary {
        column,
        count,
        mean,
        std,
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

fn pearson(records: &[DayRecord], a: Column, b: Column) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| Some((a.value(r)?, b.value(r)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a).powi(2);
        var_b += (y - mean_b).powi(2);
    }
    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data analysis:")?;
        writeln!(
            f,
            "{:<12} {:>6} {:>8} {:>8} {:>8} {:>8}",
            "", "count", "mean", "std", "min", "max"
        )?;
        for c in &self.columns {
            writeln!(
                f,
                "{:<12} {:>6} {:>8} {:>8} {:>8} {:>8}",
                c.column.name(),
                c.count,
                cell(c.mean),
                cell(c.std),
                cell(c.min),
                cell(c.max)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Correlation matrix:")?;
        write!(f, "{:<12}", "")?;
        for column in Column::ALL {
            write!(f, " {:>11}", column.name())?;
        }
        writeln!(f)?;
        for (i, row) in self.correlation.iter().enumerate() {
            write!(f, "{:<12}", Column::ALL[i].name())?;
            for value in row {
                write!(f, " {:>11}", cell(*value))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
