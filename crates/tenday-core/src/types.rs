//! Core types for tenday-core.
//!
//! This module defines the structured output of the extraction pipeline: the
//! [`DayRecord`], and the two closed vocabularies it is built from, the sky
//! [`Condition`] and the wind [`CompassPoint`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One parsed forecast period (a day, or tonight).
///
/// A record only exists when the date, condition, temperature range and wind
/// were all found on the same forecast line. Records are never mutated after
/// the extractor builds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// `"Today"`, `"Tonight"` or a weekday plus day of month (`"Mon 14"`),
    /// exactly as it appeared in the source line.
    #[serde(rename = "date")]
    pub date_label: String,
    pub condition: Condition,
    /// `None` when the source showed the `--` placeholder instead of a high.
    pub high_temp: Option<i32>,
    pub low_temp: i32,
    pub wind_direction: CompassPoint,
    /// Miles per hour.
    pub wind_speed: u32,
    /// Percent. Zero when the line carries no rain percentage.
    pub rain_chance: u32,
}

impl DayRecord {
    /// True when both temperatures are numeric and the low exceeds the high.
    ///
    /// Extraction does not reject such lines; callers treat this as a data
    /// quality signal.
    pub fn is_inverted(&self) -> bool {
        self.high_temp.is_some_and(|high| self.low_temp > high)
    }

    /// `"68°/54°"` or `"--/54°"`, the way the forecast page prints a range.
    pub fn temp_range(&self) -> String {
        match self.high_temp {
            Some(high) => format!("{high}°/{}°", self.low_temp),
            None => format!("--/{}°", self.low_temp),
        }
    }
}

/// Sky / precipitation descriptor, one of the fixed forecast vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Mostly Sunny")]
    MostlySunny,
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    #[serde(rename = "Mostly Cloudy")]
    MostlyCloudy,
    #[serde(rename = "Scattered Showers")]
    ScatteredShowers,
    #[serde(rename = "Few Showers")]
    FewShowers,
    Showers,
    #[serde(rename = "Light Rain")]
    LightRain,
    #[serde(rename = "Rain and Snow")]
    RainAndSnow,
    Rain,
    Snow,
    Thunderstorms,
    #[serde(rename = "Scattered Thunderstorms")]
    ScatteredThunderstorms,
    #[serde(rename = "Thunderstorms Early")]
    ThunderstormsEarly,
}

/// Coarse grouping of conditions, used for colouring and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sky {
    Clear,
    Cloudy,
    Wet,
    Frozen,
    Storm,
}

impl Condition {
    pub const ALL: [Condition; 14] = [
        Condition::MostlySunny,
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::MostlyCloudy,
        Condition::ScatteredShowers,
        Condition::FewShowers,
        Condition::Showers,
        Condition::LightRain,
        Condition::RainAndSnow,
        Condition::Rain,
        Condition::Snow,
        Condition::Thunderstorms,
        Condition::ScatteredThunderstorms,
        Condition::ThunderstormsEarly,
    ];

    /// The phrase as it appears on the forecast page.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::MostlySunny => "Mostly Sunny",
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::MostlyCloudy => "Mostly Cloudy",
            Condition::ScatteredShowers => "Scattered Showers",
            Condition::FewShowers => "Few Showers",
            Condition::Showers => "Showers",
            Condition::LightRain => "Light Rain",
            Condition::RainAndSnow => "Rain and Snow",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorms => "Thunderstorms",
            Condition::ScatteredThunderstorms => "Scattered Thunderstorms",
            Condition::ThunderstormsEarly => "Thunderstorms Early",
        }
    }

    pub fn sky(self) -> Sky {
        match self {
            Condition::MostlySunny | Condition::Sunny => Sky::Clear,
            Condition::PartlyCloudy | Condition::MostlyCloudy => Sky::Cloudy,
            Condition::ScatteredShowers
            | Condition::FewShowers
            | Condition::Showers
            | Condition::LightRain
            | Condition::Rain => Sky::Wet,
            Condition::RainAndSnow | Condition::Snow => Sky::Frozen,
            Condition::Thunderstorms
            | Condition::ScatteredThunderstorms
            | Condition::ThunderstormsEarly => Sky::Storm,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::CONDITION_LOOKUP
            .get(s)
            .copied()
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// One of the 16 compass-point wind direction abbreviations.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    /// Clockwise from north, so index × 22.5° is the bearing.
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }

    /// Direction the wind blows *from*, in degrees clockwise from north.
    pub fn bearing(self) -> f32 {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        idx as f32 * 22.5
    }

    /// Arrow pointing where the wind is blowing *to*.
    pub fn arrow(self) -> char {
        const ARROWS: [char; 8] = ['↓', '↙', '←', '↖', '↑', '↗', '→', '↘'];
        let octant = ((self.bearing() + 22.5) / 45.0) as usize % 8;
        ARROWS[octant]
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompassPoint {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::COMPASS_LOOKUP
            .get(s)
            .copied()
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// A vocabulary token that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vocabulary token {0:?}")]
pub struct UnknownToken(pub String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(high: Option<i32>, low: i32) -> DayRecord {
        DayRecord {
            date_label: "Mon 14".to_string(),
            condition: Condition::Rain,
            high_temp: high,
            low_temp: low,
            wind_direction: CompassPoint::NNE,
            wind_speed: 12,
            rain_chance: 40,
        }
    }

    #[test]
    fn inverted_only_when_both_numeric() {
        assert!(!record(Some(68), 54).is_inverted());
        assert!(record(Some(50), 54).is_inverted());
        assert!(!record(None, 54).is_inverted());
    }

    #[test]
    fn temp_range_uses_placeholder() {
        assert_eq!(record(Some(68), 54).temp_range(), "68°/54°");
        assert_eq!(record(None, 54).temp_range(), "--/54°");
    }

    #[test]
    fn condition_round_trips_through_phrase() {
        for cond in Condition::ALL {
            assert_eq!(cond.as_str().parse::<Condition>(), Ok(cond));
        }
    }

    #[test]
    fn compass_round_trips_through_token() {
        for point in CompassPoint::ALL {
            assert_eq!(point.as_str().parse::<CompassPoint>(), Ok(point));
        }
    }

    #[test]
    fn unknown_tokens_rejected() {
        assert!("Drizzle".parse::<Condition>().is_err());
        assert!("NORTH".parse::<CompassPoint>().is_err());
    }

    #[test]
    fn bearings_step_by_a_sixteenth() {
        assert_eq!(CompassPoint::N.bearing(), 0.0);
        assert_eq!(CompassPoint::E.bearing(), 90.0);
        assert_eq!(CompassPoint::SSW.bearing(), 202.5);
    }

    #[test]
    fn arrow_points_downwind() {
        // A north wind blows toward the south.
        assert_eq!(CompassPoint::N.arrow(), '↓');
        assert_eq!(CompassPoint::S.arrow(), '↑');
        assert_eq!(CompassPoint::W.arrow(), '→');
    }

    #[test]
    fn serializes_with_page_vocabulary() {
        let json = serde_json::to_value(record(None, 54)).unwrap();
        assert_eq!(json["date"], "Mon 14");
        assert_eq!(json["condition"], "Rain");
        assert_eq!(json["wind_direction"], "NNE");
        assert!(json["high_temp"].is_null());

        let json = serde_json::to_value(Condition::RainAndSnow).unwrap();
        assert_eq!(json, "Rain and Snow");
    }
}
