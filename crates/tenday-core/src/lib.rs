//! tenday-core — forecast text extraction core.
//!
//! This crate turns the free-text forecast blocks scraped from a ten-day
//! forecast page into structured [`DayRecord`] values, and provides the
//! export, analysis and configuration layers built on top of them.
//!
//! # Architecture
//!
//! ```text
//! catalog ──► extractor ──► normalizer ──► export
//!                                 │
//!                                 └──────► analysis
//! ```
//!
//! Everything here is synchronous and free of I/O except [`export`] and
//! [`config`]. The catalog is compiled once and shared read-only.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod normalizer;
pub mod types;

pub use catalog::PatternCatalog;
pub use error::{Error, Result};
pub use extractor::{extract, extract_line, Extraction, Field, Rejection};
pub use normalizer::{normalize, NormalizedBatch, Normalizer, SkippedLine};
pub use types::{CompassPoint, Condition, DayRecord, Sky};
