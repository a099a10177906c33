//! Source → normalizer → output wiring used by the `tenday` binary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use tenday_core::analysis::Summary;
use tenday_core::config::ExportConfig;
use tenday_core::export::{self, ExportFormat};
use tenday_core::{NormalizedBatch, Normalizer};
use tenday_feeds::{ForecastSource, ZipCode};

/// Fetch lines from `source` and normalize them.
///
/// Fetch failures carry the user-facing message as context; unparseable
/// lines are never an error and end up in [`NormalizedBatch::skipped`].
pub async fn collect<S: ForecastSource>(source: &S) -> anyhow::Result<NormalizedBatch> {
    tracing::info!(source = %source.describe(), "fetching forecast");
    let lines = source.fetch_lines().await.map_err(|err| {
        let message = err.user_message();
        anyhow::Error::new(err).context(message)
    })?;

    let batch = Normalizer::default()
        .normalize_with_diagnostics(&lines)
        .context("forecast pattern catalog is broken")?;

    if batch.records.is_empty() && !lines.is_empty() {
        tracing::warn!(lines = lines.len(), "no line could be parsed into a forecast record");
    }
    Ok(batch)
}

/// Label substituted for `{zip}` in export file names: the ZIP code, or the
/// input file's stem when reading from a file.
pub fn output_label(zip: Option<&ZipCode>, input: Option<&Path>) -> String {
    match (zip, input) {
        (Some(zip), _) => zip.to_string(),
        (None, Some(path)) if path.as_os_str() != "-" => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string()),
        _ => "stdin".to_string(),
    }
}

/// `<directory>/<file_name_template>.<ext>` for `--save`.
pub fn save_path(
    export: &ExportConfig,
    label: &str,
    date: NaiveDate,
    format: ExportFormat,
) -> PathBuf {
    export.directory.join(export::export_file_name(
        &export.file_name_template,
        label,
        date,
        format,
    ))
}

/// Write the records in `format`, followed by the analysis summary when
/// `summary` is set.
pub fn write_report<W: Write>(
    batch: &NormalizedBatch,
    format: ExportFormat,
    summary: bool,
    mut out: W,
) -> anyhow::Result<()> {
    export::write_records(&batch.records, format, &mut out)?;
    if summary {
        write_summary(batch, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_summary<W: Write>(batch: &NormalizedBatch, mut out: W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", Summary::of(&batch.records))
}

/// One line per skipped input line: its 1-based number, what was missing,
/// and the text itself.
pub fn write_skipped<W: Write>(batch: &NormalizedBatch, mut out: W) -> io::Result<()> {
    for skipped in &batch.skipped {
        writeln!(
            out,
            "line {}: {}: {}",
            skipped.index + 1,
            skipped.rejection,
            skipped.line
        )?;
    }
    if !batch.skipped.is_empty() {
        writeln!(
            out,
            "{} of {} lines skipped",
            batch.skipped.len(),
            batch.lines_seen()
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
