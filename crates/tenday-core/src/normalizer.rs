//! Normalizer — applies the field extractor to a batch of forecast lines.
//!
//! Lines are processed independently and in order. Lines that lack a required
//! field are dropped without leaving a gap; [`Normalizer::normalize_with_diagnostics`]
//! reports them alongside the records.

use crate::catalog::PatternCatalog;
use crate::error::Result;
use crate::extractor::{extract, Extraction, Rejection};
use crate::types::DayRecord;

/// A line the extractor could not turn into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// Zero-based position of the line in the input batch.
    pub index: usize,
    pub line: String,
    pub rejection: Rejection,
}

/// Records plus diagnostics for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    /// Parsed records, in source-line order.
    pub records: Vec<DayRecord>,
    /// Dropped lines, in source-line order.
    pub skipped: Vec<SkippedLine>,
    /// Number of records whose low exceeds their high.
    pub inverted: usize,
}

impl NormalizedBatch {
    /// Total number of input lines seen.
    pub fn lines_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Batch front-end over a [`PatternCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'c> {
    catalog: &'c PatternCatalog,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::global())
    }
}

impl<'c> Normalizer<'c> {
    pub fn new(catalog: &'c PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Parse every line, keeping only the records.
    pub fn normalize<I, S>(&self, lines: I) -> Result<Vec<DayRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.normalize_with_diagnostics(lines)?.records)
    }

    /// Parse every line, keeping records and the list of skipped lines.
    pub fn normalize_with_diagnostics<I, S>(&self, lines: I) -> Result<NormalizedBatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = NormalizedBatch::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match extract(self.catalog, line)? {
                Extraction::Record(record) => {
                    if record.is_inverted() {
                        tracing::warn!(
                            index,
                            date = %record.date_label,
                            high = ?record.high_temp,
                            low = record.low_temp,
                            "low temperature exceeds high"
                        );
                        batch.inverted += 1;
                    }
                    batch.records.push(record);
                }
                Extraction::Skipped(rejection) => {
                    tracing::debug!(index, line, %rejection, "skipping forecast line");
                    batch.skipped.push(SkippedLine {
                        index,
                        line: line.to_string(),
                        rejection,
                    });
                }
            }
        }

        tracing::info!(
            records = batch.records.len(),
            skipped = batch.skipped.len(),
            inverted = batch.inverted,
            "normalized forecast batch"
        );
        Ok(batch)
    }
}

/// Normalize `lines` with the global catalog.
pub fn normalize<I, S>(lines: I) -> Result<Vec<DayRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::default().normalize(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
