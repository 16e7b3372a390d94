//! Collaborator boundaries: calendar conversion and the gazetteer.
//!
//! The engine never computes solar terms or lunar dates itself; a
//! [`CalendarProvider`] supplies pillar extraction and, where authoritative,
//! the day's void branches and the term distance behind the start-age rule.
//! Gazetteer misses are not errors: resolution degrades to the documented
//! default coordinate.

use chrono::NaiveDateTime;
use thiserror::Error;

use sizhu_core::{Branch, Stem};
use sizhu_time::DEFAULT_COORDINATE;

/// A collaborator failed or timed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The calendar collaborator is unavailable; surfaced immediately.
    #[error("calendar collaborator unavailable: {0}")]
    CalendarUnavailable(String),
}

/// Raw pillar extraction for a (true-solar-corrected) birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarExtract {
    /// Year stem-branch pair.
    pub year: (Stem, Branch),
    /// Month stem-branch pair.
    pub month: (Stem, Branch),
    /// Day stem-branch pair.
    pub day: (Stem, Branch),
    /// Hour stem-branch pair.
    pub hour: (Stem, Branch),
    /// Lunar calendar year.
    pub lunar_year: i32,
    /// Lunar month (1..=12).
    pub lunar_month: u8,
    /// Lunar day (1..=30).
    pub lunar_day: u8,
    /// Whether the lunar month is a leap month.
    pub leap_month: bool,
}

impl PillarExtract {
    /// The four pairs in year/month/day/hour order.
    pub const fn pairs(&self) -> [(Stem, Branch); 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Solar-to-lunar calendar conversion, supplied externally.
///
/// Synchronous and cancellable-on-timeout from the caller's side; the engine
/// adds no retries.
pub trait CalendarProvider {
    /// Extract the four pillars and lunar date for a civil timestamp.
    fn solar_to_pillars(&self, at: NaiveDateTime) -> Result<PillarExtract, ProviderError>;

    /// Zodiac animal of the timestamp's year.
    fn year_zodiac_animal(&self, at: NaiveDateTime) -> Result<String, ProviderError> {
        Ok(self.solar_to_pillars(at)?.year.1.animal().to_string())
    }

    /// Authoritative void branches of the timestamp's day, when the
    /// collaborator knows them. `None` defers to the decade-block table.
    fn day_void_branches(
        &self,
        at: NaiveDateTime,
    ) -> Result<Option<(Branch, Branch)>, ProviderError> {
        let _ = at;
        Ok(None)
    }

    /// Day distance from the timestamp to the adjacent solar term (next
    /// term when `forward`, previous otherwise), when known. `None` defers
    /// to the default start age.
    fn days_to_adjacent_term(
        &self,
        at: NaiveDateTime,
        forward: bool,
    ) -> Result<Option<f64>, ProviderError> {
        let _ = (at, forward);
        Ok(None)
    }
}

/// Place-name to coordinate resolution, supplied externally.
pub trait Gazetteer {
    /// Resolve a place name to (longitude, latitude), `None` when unknown.
    fn resolve(&self, place: &str) -> Option<(f64, f64)>;
}

/// Resolve a coordinate, degrading to the default instead of failing.
pub fn resolve_or_default(gazetteer: &dyn Gazetteer, place: &str) -> (f64, f64) {
    gazetteer.resolve(place).unwrap_or(DEFAULT_COORDINATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCalendar;

    impl CalendarProvider for FixedCalendar {
        fn solar_to_pillars(&self, _at: NaiveDateTime) -> Result<PillarExtract, ProviderError> {
            Ok(PillarExtract {
                year: (Stem::Jia, Branch::Zi),
                month: (Stem::Bing, Branch::Yin),
                day: (Stem::Wu, Branch::Wu),
                hour: (Stem::Ren, Branch::Xu),
                lunar_year: 1984,
                lunar_month: 1,
                lunar_day: 2,
                leap_month: false,
            })
        }
    }

    struct EmptyGazetteer;

    impl Gazetteer for EmptyGazetteer {
        fn resolve(&self, _place: &str) -> Option<(f64, f64)> {
            None
        }
    }

    fn noon() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(1984, 2, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn default_animal_derives_from_year_branch() {
        let animal = FixedCalendar.year_zodiac_animal(noon()).unwrap();
        assert_eq!(animal, "鼠");
    }

    #[test]
    fn default_void_and_term_defer() {
        assert_eq!(FixedCalendar.day_void_branches(noon()).unwrap(), None);
        assert_eq!(
            FixedCalendar.days_to_adjacent_term(noon(), true).unwrap(),
            None
        );
    }

    #[test]
    fn gazetteer_miss_degrades_to_default() {
        assert_eq!(
            resolve_or_default(&EmptyGazetteer, "nowhere"),
            DEFAULT_COORDINATE
        );
    }
}
