//! Configuration types for tenday.
//!
//! [`Config::load`] reads `~/.config/tenday/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `TENDAY_*`
//! environment overrides (`TENDAY_FETCH__TIMEOUT_SECS=30`).
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[fetch]
url_template = "https://weather.com/weather/tenday/l/{zip}"
timeout_secs = 15
user_agent   = "Mozilla/5.0 (X11; Linux x86_64) tenday/0.1"

[export]
format             = "csv"
directory          = "."
file_name_template = "weather_{zip}_{date}"

[ui]
theme        = "default"
show_skipped = true
# The chart scales to the forecast unless these pin an end of the y axis.
# chart_min = 0
# chart_max = 100
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/tenday/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[fetch]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Forecast page URL; `{zip}` is replaced with the ZIP code.
    #[serde(default = "default_url_template")]
    pub url_template: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_url_template() -> String { "https://weather.com/weather/tenday/l/{zip}".to_string() }
fn default_timeout_secs() -> u64 { 15 }
fn default_user_agent() -> String { "Mozilla/5.0 (X11; Linux x86_64) tenday/0.1".to_string() }

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn url_for(&self, zip: &str) -> String {
        self.url_template.replace("{zip}", zip)
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// `csv`, `jsonl` or `table`.
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// `{zip}` and `{date}` (MMDDYYYY) are substituted; the extension is added.
    #[serde(default = "default_file_name_template")]
    pub file_name_template: String,
}

fn default_format() -> String { "csv".to_string() }
fn default_directory() -> PathBuf { PathBuf::from(".") }
fn default_file_name_template() -> String { "weather_{zip}_{date}".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_directory(),
            file_name_template: default_file_name_template(),
        }
    }
}

impl ExportConfig {
    pub fn format(&self) -> crate::Result<ExportFormat> {
        self.format.parse()
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Fixed lower bound of the temperature chart's y axis.
    #[serde(default)]
    pub chart_min: Option<i32>,
    /// Fixed upper bound of the temperature chart's y axis.
    #[serde(default)]
    pub chart_max: Option<i32>,
    #[serde(default = "default_show_skipped")]
    pub show_skipped: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_skipped() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            chart_min: None,
            chart_max: None,
            show_skipped: default_show_skipped(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/tenday/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered on the defaults, plus environment overrides.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("TENDAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("tenday")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.fetch.timeout_secs, 15);
        assert_eq!(cfg.export.format().unwrap(), ExportFormat::Csv);
        assert_eq!(cfg.export.file_name_template, "weather_{zip}_{date}");
        assert_eq!(cfg.ui.chart_min, None);
        assert_eq!(cfg.ui.chart_max, None);
        assert!(cfg.ui.show_skipped);
    }

    #[test]
    fn url_template_expands_zip() {
        let cfg = Config::defaults();
        assert_eq!(
            cfg.fetch.url_for("02134"),
            "https://weather.com/weather/tenday/l/02134"
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\nformat = \"jsonl\"\n\n[ui]\nchart_max = 120\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.export.format().unwrap(), ExportFormat::Jsonl);
        assert_eq!(cfg.ui.chart_max, Some(120));
        assert_eq!(cfg.ui.chart_min, None);
        // untouched keys keep their defaults
        assert_eq!(cfg.fetch.timeout_secs, 15);
        assert_eq!(cfg.ui.theme, "default");
    }

    #[test]
    fn missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.export.directory, PathBuf::from("."));
    }
}
