#![allow(unused)]
//! File source integration harness.
//!
//! # What this covers
//!
//! - **Source → normalizer**: a forecast file read through `FileSource` and
//!   `pipeline::collect` yields the same records as normalizing the lines
//!   directly.
//! - **Line handling**: CRLF endings are stripped, blank lines never reach the
//!   normalizer, and invalid UTF-8 is replaced instead of failing the batch.
//! - **Errors**: a missing file is an error with a readable message; a file
//!   with no parseable line is not.
//! - **Property: every line accounted for**: for any generated mix of good and
//!   garbled lines, records plus skipped lines equal the non-blank line count.
//!
//! # What this does NOT cover
//!
//! - Standard input (see `cli_harness`)
//! - Files larger than available memory
//!
//! # Running
//!
//! ```sh
//! cargo test --test file_harness
//! ```

mod common;
use common::*;

use std::io::Write;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tenday::pipeline;
use tenday_feeds::{FileSource, ForecastSource};

fn write_lines(lines: &[&str], ending: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        write!(file, "{line}{ending}").unwrap();
    }
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Source → normalizer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collected_file_matches_direct_normalization() {
    let file = write_lines(CORPUS_TEN_DAY, "\n");
    let batch = pipeline::collect(&FileSource::new(file.path())).await.unwrap();

    assert_eq!(batch.records, tenday_core::normalize(CORPUS_TEN_DAY).unwrap());
    assert!(batch.skipped.is_empty());
}

#[tokio::test]
async fn mixed_file_reports_skipped_lines() {
    let file = write_lines(CORPUS_MIXED, "\r\n");
    let batch = pipeline::collect(&FileSource::new(file.path())).await.unwrap();

    assert_eq!(batch.records[..2], scenario_records()[..]);
    assert_eq!(batch.records.len(), 3);
    let skipped: Vec<&str> = batch.skipped.iter().map(|s| s.line.as_str()).collect();
    assert_eq!(
        skipped,
        ["Garbled nonsense with no recognizable fields", "Advertisement"]
    );
}

#[tokio::test]
async fn blank_lines_do_not_count_as_skipped() {
    let file = write_lines(&["", CORPUS_NIGHT[0], "   ", CORPUS_NIGHT[1], ""], "\n");
    let batch = pipeline::collect(&FileSource::new(file.path())).await.unwrap();

    assert_eq!(batch.records.len(), 2);
    assert!(batch.skipped.is_empty());
}

#[tokio::test]
async fn invalid_utf8_does_not_fail_the_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Today Sunny 70\xB0/50\xB0 WindN5mph\n").unwrap();
    file.write_all(CORPUS_NIGHT[1].as_bytes()).unwrap();
    file.flush().unwrap();

    let batch = pipeline::collect(&FileSource::new(file.path())).await.unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].date_label, "Tonight");
    assert_eq!(batch.skipped.len(), 1);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("absent.txt"));

    let err = pipeline::collect(&source).await.unwrap_err();
    assert!(format!("{err:#}").contains("I/O error"), "{err:#}");
}

#[tokio::test]
async fn unparseable_file_is_empty_not_an_error() {
    let file = write_lines(CORPUS_GARBLED, "\n");
    let batch = pipeline::collect(&FileSource::new(file.path())).await.unwrap();

    assert!(batch.records.is_empty());
    // "" and "   " never reach the normalizer
    assert_eq!(batch.skipped.len(), CORPUS_GARBLED.len() - 2);
}

#[test]
fn describe_names_the_path() {
    let source = FileSource::new("/var/tmp/days.txt");
    assert_eq!(source.describe(), "file /var/tmp/days.txt");
    assert_eq!(FileSource::new("-").describe(), "standard input");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_written_line_is_accounted_for(
        picks in prop::collection::vec((any::<bool>(), 0usize..10), 1..30)
    ) {
        let lines: Vec<&str> = picks
            .iter()
            .map(|&(good, i)| if good { CORPUS_TEN_DAY[i] } else { CORPUS_MIXED[1] })
            .collect();
        let file = write_lines(&lines, "\n");

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let batch = runtime
            .block_on(pipeline::collect(&FileSource::new(file.path())))
            .unwrap();

        let good = picks.iter().filter(|(g, _)| *g).count();
        prop_assert_eq!(batch.records.len(), good);
        prop_assert_eq!(batch.lines_seen(), lines.len());
    }
}
