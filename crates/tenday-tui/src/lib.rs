//! tenday TUI — ratatui viewer for a normalized forecast batch.
//!
//! Shows the parsed records as a table, a high/low temperature chart, and
//! the list of lines that were skipped.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

use std::path::PathBuf;

pub use app::App;
use tenday_core::{config::Config, NormalizedBatch};

/// Run the viewer until the user quits. `export_path` is where a bare
/// `:export` writes.
pub fn run(batch: NormalizedBatch, config: Config, export_path: PathBuf) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });
    App::new(batch, config, theme, export_path).run()
}
