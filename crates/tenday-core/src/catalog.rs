//! Pattern catalog — the fixed vocabulary and shapes recognised in forecast text.
//!
//! Five independent matchers, compiled once into a [`PatternCatalog`] and
//! shared read-only through [`PatternCatalog::global`]. The alternation lists
//! ([`CONDITION_PHRASES`], [`COMPASS_TOKENS`]) are ordered most-specific-first:
//! `regex` uses leftmost-first semantics, so at any position an earlier
//! alternative wins over a later one that is its substring.

use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{CompassPoint, Condition};

/// Bumped whenever a matcher or vocabulary list changes.
pub const CATALOG_VERSION: u32 = 1;

/// Condition phrases in match-priority order. Every phrase precedes any other
/// phrase that is a substring of it.
pub const CONDITION_PHRASES: &[&str] = &[
    "Scattered Thunderstorms",
    "Thunderstorms Early",
    "Scattered Showers",
    "Rain and Snow",
    "Partly Cloudy",
    "Mostly Cloudy",
    "Mostly Sunny",
    "Thunderstorms",
    "Few Showers",
    "Light Rain",
    "Showers",
    "Sunny",
    "Rain",
    "Snow",
];

/// Compass tokens, three-letter tokens first so `N` never shadows `NNE`.
pub const COMPASS_TOKENS: &[&str] = &[
    "NNE", "ENE", "ESE", "SSE", "SSW", "WSW", "WNW", "NNW", "NE", "SE", "SW", "NW", "N", "E", "S",
    "W",
];

pub(crate) static CONDITION_LOOKUP: phf::Map<&'static str, Condition> = phf_map! {
    "Mostly Sunny" => Condition::MostlySunny,
    "Sunny" => Condition::Sunny,
    "Partly Cloudy" => Condition::PartlyCloudy,
    "Mostly Cloudy" => Condition::MostlyCloudy,
    "Scattered Showers" => Condition::ScatteredShowers,
    "Few Showers" => Condition::FewShowers,
    "Showers" => Condition::Showers,
    "Light Rain" => Condition::LightRain,
    "Rain and Snow" => Condition::RainAndSnow,
    "Rain" => Condition::Rain,
    "Snow" => Condition::Snow,
    "Thunderstorms" => Condition::Thunderstorms,
    "Scattered Thunderstorms" => Condition::ScatteredThunderstorms,
    "Thunderstorms Early" => Condition::ThunderstormsEarly,
};

pub(crate) static COMPASS_LOOKUP: phf::Map<&'static str, CompassPoint> = phf_map! {
    "N" => CompassPoint::N,
    "NNE" => CompassPoint::NNE,
    "NE" => CompassPoint::NE,
    "ENE" => CompassPoint::ENE,
    "E" => CompassPoint::E,
    "ESE" => CompassPoint::ESE,
    "SE" => CompassPoint::SE,
    "SSE" => CompassPoint::SSE,
    "S" => CompassPoint::S,
    "SSW" => CompassPoint::SSW,
    "SW" => CompassPoint::SW,
    "WSW" => CompassPoint::WSW,
    "W" => CompassPoint::W,
    "WNW" => CompassPoint::WNW,
    "NW" => CompassPoint::NW,
    "NNW" => CompassPoint::NNW,
};

const DATE_PATTERN: &str = r"^(?:Today|Tonight|(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun) \d{1,2})";
/// The leading non-digit keeps a run-together label such as `Mon 1468°/54°`
/// from being read as a high of 468.
const TEMP_PATTERN: &str =
    r"(?:^|\D)(?:(?P<high>\d{1,3})°|(?P<placeholder>--))/(?P<low>\d{1,3})°";
const RAIN_PATTERN: &str = r"Rain(?P<pct>\d{1,3})%";

static GLOBAL: LazyLock<PatternCatalog> = LazyLock::new(|| {
    PatternCatalog::new().expect("built-in pattern catalog must compile")
});

/// The compiled matchers. Construct once; every method takes `&self`.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    pub(crate) date: Regex,
    pub(crate) condition: Regex,
    pub(crate) temperature: Regex,
    pub(crate) wind: Regex,
    pub(crate) rain: Regex,
}

impl PatternCatalog {
    /// Compile the built-in vocabulary.
    pub fn new() -> Result<Self> {
        // a phrase directly followed by a digit is the rain-chance token
        let condition = format!(r"(?P<phrase>{})(?:\D|$)", alternation(CONDITION_PHRASES));
        let wind = format!(
            r"Wind ?(?P<dir>{}) ?(?P<speed>\d{{1,2}}) ?mph",
            alternation(COMPASS_TOKENS)
        );

        Ok(Self {
            date: compile("date", DATE_PATTERN)?,
            condition: compile("condition", &condition)?,
            temperature: compile("temperature", TEMP_PATTERN)?,
            wind: compile("wind", &wind)?,
            rain: compile("rain", RAIN_PATTERN)?,
        })
    }

    /// Process-wide catalog, compiled on first use.
    pub fn global() -> &'static PatternCatalog {
        &GLOBAL
    }

    pub fn version(&self) -> u32 {
        CATALOG_VERSION
    }
}

fn alternation(options: &[&str]) -> String {
    options
        .iter()
        .map(|o| regex::escape(o))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(matcher: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::CatalogPattern { matcher, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
