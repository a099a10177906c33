//! Colour theme for the tenday TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`] so the application works without any files on disk.
//! Conditions are coloured by their [`Sky`] category rather than one colour
//! per phrase.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tenday_core::Sky;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

/// Names accepted by [`Theme::by_name`].
pub const THEME_NAMES: &[&str] = &["default", "gruvbox"];

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    reversed: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.reversed {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawSky {
    clear: RawStyle,
    cloudy: RawStyle,
    wet: RawStyle,
    frozen: RawStyle,
    storm: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTemps {
    high: RawStyle,
    low: RawStyle,
    inverted: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawUi {
    selection: RawStyle,
    header: RawStyle,
    active_tab: RawStyle,
    status: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    sky: RawSky,
    temps: RawTemps,
    borders: RawBorders,
    ui: RawUi,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub sky_clear: Style,
    pub sky_cloudy: Style,
    pub sky_wet: Style,
    pub sky_frozen: Style,
    pub sky_storm: Style,

    /// High temperature column and chart series.
    pub temp_high: Style,
    /// Low temperature column and chart series.
    pub temp_low: Style,
    /// Rows whose low exceeds the high.
    pub temp_inverted: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Highlighted row in tables and lists.
    pub selection: Style,
    pub header: Style,
    pub active_tab: Style,
    pub status: Style,
    pub error: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Look up an embedded theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            sky_clear: raw.sky.clear.into_style(),
            sky_cloudy: raw.sky.cloudy.into_style(),
            sky_wet: raw.sky.wet.into_style(),
            sky_frozen: raw.sky.frozen.into_style(),
            sky_storm: raw.sky.storm.into_style(),
            temp_high: raw.temps.high.into_style(),
            temp_low: raw.temps.low.into_style(),
            temp_inverted: raw.temps.inverted.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            selection: raw.ui.selection.into_style(),
            header: raw.ui.header.into_style(),
            active_tab: raw.ui.active_tab.into_style(),
            status: raw.ui.status.into_style(),
            error: raw.ui.error.into_style(),
        })
    }

    pub fn sky_style(&self, sky: Sky) -> Style {
        match sky {
            Sky::Clear => self.sky_clear,
            Sky::Cloudy => self.sky_cloudy,
            Sky::Wet => self.sky_wet,
            Sky::Frozen => self.sky_frozen,
            Sky::Storm => self.sky_storm,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts named terminal colours (`red`, `dark_gray`, ...), hex RGB
/// (`#rrggbb`) and 256-colour indexed values (`indexed:N`).
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_themes_load() {
        for name in THEME_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_ne!(theme.temp_high, Style::default(), "{name}");
            assert_ne!(theme.temp_low, Style::default(), "{name}");
            assert_ne!(theme.border_focused, Style::default(), "{name}");
            assert_ne!(theme.selection, Style::default(), "{name}");
        }
    }

    #[test]
    fn unknown_theme_name() {
        assert!(Theme::by_name("solarized").is_none());
        assert!(Theme::by_name("GRUVBOX").is_some());
    }

    #[test]
    fn sky_categories_are_distinct() {
        let theme = Theme::load_default();
        let styles: std::collections::HashSet<_> = [
            Sky::Clear,
            Sky::Cloudy,
            Sky::Wet,
            Sky::Frozen,
            Sky::Storm,
        ]
        .into_iter()
        .map(|s| theme.sky_style(s))
        .collect();
        assert_eq!(styles.len(), 5);
    }

    #[test]
    fn malformed_theme_is_an_error() {
        assert!(Theme::from_toml_str("[sky]\nclear = 3").is_err());
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
