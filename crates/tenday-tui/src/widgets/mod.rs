//! Ratatui widgets for the tenday TUI.

pub mod command_bar;
pub mod forecast_table;
pub mod help;
pub mod scroll;
pub mod skipped_list;
pub mod tab_bar;
pub mod temp_chart;
