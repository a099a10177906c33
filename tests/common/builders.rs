//! Test builders — ergonomic constructors for `DayRecord`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use tenday_core::{CompassPoint, Condition, DayRecord};

/// Fluent builder for [`DayRecord`] test fixtures.
///
/// ```rust
/// let rec = DayRecordBuilder::new("Mon 14")
///     .condition(Condition::Rain)
///     .temps(Some(68), 54)
///     .wind(CompassPoint::NNE, 12)
///     .rain(40)
///     .build();
/// ```
pub struct DayRecordBuilder {
    record: DayRecord,
}

impl DayRecordBuilder {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            record: DayRecord {
                date_label: date.into(),
                condition: Condition::Sunny,
                high_temp: Some(70),
                low_temp: 50,
                wind_direction: CompassPoint::N,
                wind_speed: 5,
                rain_chance: 0,
            },
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.record.condition = condition;
        self
    }

    pub fn temps(mut self, high: Option<i32>, low: i32) -> Self {
        self.record.high_temp = high;
        self.record.low_temp = low;
        self
    }

    pub fn wind(mut self, direction: CompassPoint, speed: u32) -> Self {
        self.record.wind_direction = direction;
        self.record.wind_speed = speed;
        self
    }

    pub fn rain(mut self, pct: u32) -> Self {
        self.record.rain_chance = pct;
        self
    }

    pub fn build(self) -> DayRecord {
        self.record
    }
}

/// The two records the scenario lines at the top of `CORPUS_MIXED`
/// start with.
pub fn scenario_records() -> Vec<DayRecord> {
    vec![
        DayRecordBuilder::new("Tonight")
            .condition(Condition::Showers)
            .temps(None, 54)
            .wind(CompassPoint::S, 8)
            .build(),
        DayRecordBuilder::new("Mon 14")
            .condition(Condition::Rain)
            .temps(Some(68), 54)
            .wind(CompassPoint::NNE, 12)
            .rain(40)
            .build(),
    ]
}
