//! Error types for tenday-core.
//!
//! Unparseable forecast lines are *not* errors; they come back as
//! [`Extraction::Skipped`](crate::extractor::Extraction::Skipped). The catalog
//! variants below only fire when the built-in vocabulary is inconsistent.

use thiserror::Error;

use crate::types::UnknownToken;

/// Main error type for tenday-core.
#[derive(Error, Debug)]
pub enum Error {
    /// A catalog pattern failed to compile.
    #[error("catalog matcher `{matcher}` does not compile: {source}")]
    CatalogPattern {
        matcher: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A matcher succeeded but a group it always captures was absent.
    #[error("catalog matcher `{matcher}` matched without capture group `{group}`")]
    CatalogGroup {
        matcher: &'static str,
        group: &'static str,
    },

    /// A matcher captured a token that the typed vocabulary does not know.
    #[error("catalog matcher `{matcher}` captured a token outside the vocabulary: {source}")]
    UnknownToken {
        matcher: &'static str,
        #[source]
        source: UnknownToken,
    },

    /// A digit group did not parse as a number.
    #[error("catalog matcher `{matcher}` captured non-numeric text {text:?}")]
    CatalogNumber { matcher: &'static str, text: String },

    /// Unknown export format name.
    #[error("unknown export format {0:?} (expected csv, jsonl or table)")]
    UnknownFormat(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the variants that indicate a broken catalog rather than a
    /// runtime condition.
    pub fn is_catalog_defect(&self) -> bool {
        matches!(
            self,
            Error::CatalogPattern { .. }
                | Error::CatalogGroup { .. }
                | Error::UnknownToken { .. }
                | Error::CatalogNumber { .. }
        )
    }
}

/// Core result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_defects_classified() {
        let err = Error::CatalogGroup {
            matcher: "wind",
            group: "dir",
        };
        assert!(err.is_catalog_defect());
        assert!(err.to_string().contains("`wind`"));

        let err = Error::UnknownFormat("xml".to_string());
        assert!(!err.is_catalog_defect());
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
