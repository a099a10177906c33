//! tenday — ten-day forecast scraper.
//!
//! Fetches the ten-day forecast page for a ZIP code, parses each period's
//! free text into a structured [`tenday_core::DayRecord`], and exports the
//! records as CSV, JSON Lines or a terminal table.
//!
//! # Architecture
//!
//! ```text
//! tenday-feeds ──► tenday-core (catalog ─► extractor ─► normalizer) ──► export / analysis
//!                                                         │
//!                                                         └──► tenday-tui
//! ```
//!
//! The binary lives in `main.rs`; [`pipeline`] holds the wiring so the
//! integration tests can drive it without a terminal or network.

pub mod pipeline;
