//! tenday-feeds — forecast line sources for tenday.
//!
//! Each source produces the ordered per-day forecast texts (earliest first)
//! that [`tenday_core::Normalizer`] consumes. The web source fetches the
//! ten-day page and pulls the summary text out of its markup; the file and
//! stdin sources read one forecast line per text line.

pub mod error;
pub mod file;
pub mod page;
pub mod stdin;
pub mod web;
pub mod zip;

use std::future::Future;

pub use error::FeedError;
pub use file::FileSource;
pub use stdin::StdinSource;
pub use web::WebSource;
pub use zip::ZipCode;

/// Trait implemented by each forecast line source.
pub trait ForecastSource: Send + Sync {
    /// Fetch the forecast lines, earliest period first.
    fn fetch_lines(&self) -> impl Future<Output = Result<Vec<String>, FeedError>> + Send;

    /// Short human-readable description for logs and status lines.
    fn describe(&self) -> String;
}

/// Split decoded text into forecast lines, dropping a trailing `\r` from each
/// and skipping lines that are blank.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}
